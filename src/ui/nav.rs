//! Fixed navigation bar
//!
//! Mobile menu toggle, smooth scrolling to sections, active-link
//! highlighting on scroll and the scroll-dependent shadow.

use leptos::prelude::*;

use crate::core::navigation::{MenuState, SHADOW_RESTING};

/// Sections reachable from the menu, in document order
pub const NAV_LINKS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("services", "Services"),
    ("about", "About"),
    ("projects", "Projects"),
    ("testimonials", "Testimonials"),
    ("contact", "Contact"),
];

#[cfg(not(feature = "ssr"))]
mod dom {
    use leptos::prelude::*;
    use leptos::wasm_bindgen::JsCast;
    use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

    use crate::core::navigation::{SectionBounds, scroll_target};

    pub fn scroll_y() -> f64 {
        window().scroll_y().unwrap_or(0.0)
    }

    /// Bounds of every `section[id]` on the page
    pub fn sections() -> Vec<SectionBounds> {
        let Ok(nodes) = document().query_selector_all("section[id]") else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(|el| {
                SectionBounds::new(el.id(), el.offset_top() as f64, el.offset_height() as f64)
            })
            .collect()
    }

    /// Smooth-scroll so the section starts just below the fixed navbar
    pub fn scroll_to_section(id: &str) {
        let doc = document();
        let Some(section) = doc
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let nav_height = doc
            .query_selector(".nav")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| el.offset_height() as f64)
            .unwrap_or(0.0);

        let options = ScrollToOptions::new();
        options.set_top(scroll_target(section.offset_top() as f64, nav_height));
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());
    let active = RwSignal::new(Option::<String>::None);
    let shadow = RwSignal::new(SHADOW_RESTING);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::navigation::{active_section, navbar_shadow};

        let refresh = move || {
            let y = dom::scroll_y();
            shadow.set(navbar_shadow(y));
            // Keep the previous highlight when no section contains the probe
            if let Some(id) = active_section(y, &dom::sections()) {
                active.set(Some(id.to_string()));
            }
        };

        // Initial highlight once mounted
        Effect::new(move |_| refresh());

        let handle = window_event_listener(leptos::ev::scroll, move |_| refresh());
        on_cleanup(move || drop(handle));
    }

    let bars = move || menu.with(MenuState::bar_styles);

    view! {
        <nav id="navbar" class="nav" style:box-shadow=move || shadow.get()>
            <div class="nav__container">
                <a href="#home" class="nav__logo">"Northwind Studio"</a>

                <ul id="navMenu" class="nav__menu" class:active=move || menu.with(MenuState::is_open)>
                    {NAV_LINKS
                        .into_iter()
                        .map(|(id, label)| {
                            view! {
                                <li class="nav__item">
                                    <a
                                        href=format!("#{id}")
                                        class="nav__link"
                                        class:active=move || active.with(|a| a.as_deref() == Some(id))
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            menu.update(MenuState::close);
                                            #[cfg(not(feature = "ssr"))]
                                            dom::scroll_to_section(id);
                                        }
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <button
                    id="navToggle"
                    class="nav__toggle"
                    type="button"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu.with(MenuState::is_open).to_string()
                    on:click=move |_| menu.update(MenuState::toggle)
                >
                    <span class="nav__toggle-bar" style:transform=move || bars().top_transform></span>
                    <span class="nav__toggle-bar" style:opacity=move || bars().middle_opacity></span>
                    <span class="nav__toggle-bar" style:transform=move || bars().bottom_transform></span>
                </button>
            </div>
        </nav>
    }
}
