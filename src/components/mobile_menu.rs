use crate::analytics::track_menu_opened;
use crate::components::header::NAV_LINKS;
use crate::haptics::vibrate_tap;
use crate::menu::MenuState;
use leptos::*;

#[component]
pub fn MobileMenu() -> impl IntoView {
    let (state, set_state) = create_signal(MenuState::default());

    let toggle = move |_| {
        set_state.update(|s| *s = s.toggle());
        vibrate_tap();
        if state.get_untracked().is_open() {
            track_menu_opened();
        }
    };

    view! {
        <div class="mobile-menu">
            <button
                class="menu-button"
                aria-label="Menu"
                aria-expanded=move || state.get().aria_expanded()
                on:click=toggle
            >
                "\u{2630}"
            </button>
            <Show when=move || state.get().is_open()>
                <div class="menu-panel">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| view! { <a href=href class="menu-link">{label}</a> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
