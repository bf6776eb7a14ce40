// services/clinic-dash/src/components/xray_modal.rs
//
// Clinic Dashboard - X-ray Viewer Modal
//

use leptos::*;
use crate::state::ClinicState;

#[component]
pub fn XrayModal(state: ClinicState) -> impl IntoView {
    let close = move |_: ev::MouseEvent| state.clear_xray_selection();

    view! {
        <Show
            when=move || state.xray_modal_open.get()
            fallback=|| view! {}
        >
            <div class="modal-overlay" on:click=close>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2 class="modal-title">"X-ray Image"</h2>
                        <button class="modal-close" on:click=close>"✕"</button>
                    </div>

                    <div class="modal-body">
                        <div class="xray-frame">
                            {move || state.selected_xray.get().map(|file| view! {
                                <img
                                    class="xray-image"
                                    src=state.xray_url(&file)
                                    alt="X-ray"
                                    width="400"
                                    height="400"
                                />
                            })}
                        </div>
                        <p class="xray-caption">
                            {move || state.selected_xray.get().unwrap_or_default()}
                        </p>
                    </div>
                </div>
            </div>
        </Show>
    }
}
