use leptos::prelude::*;

use crate::core::navigation::FADE_IN_SELECTORS;

/// Fades in content blocks the first time they scroll into view and keeps
/// the page from scrolling sideways on narrow screens
#[component]
pub fn FadeInScript() -> impl IntoView {
    let script = format!(
        r#"
        (function() {{
            function initFadeIn() {{
                document.body.style.overflowX = 'hidden';

                const observer = new IntersectionObserver((entries) => {{
                    entries.forEach(entry => {{
                        if (entry.isIntersecting) {{
                            entry.target.classList.add('fade-in');
                            observer.unobserve(entry.target);
                        }}
                    }});
                }}, {{
                    threshold: 0.1,
                    rootMargin: '0px 0px -50px 0px'
                }});

                document.querySelectorAll('{FADE_IN_SELECTORS}').forEach(el => {{
                    observer.observe(el);
                }});
            }}

            if (document.readyState === 'loading') {{
                document.addEventListener('DOMContentLoaded', initFadeIn);
            }} else {{
                initFadeIn();
            }}
        }})();
        "#
    );

    view! { <script inner_html=script></script> }
}
