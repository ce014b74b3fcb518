//! Home page: the single-page marketing site
//!
//! Sections are plain `section[id]` blocks so the navbar can scroll to and
//! highlight them.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::ui::carousel::TestimonialCarousel;
use crate::ui::contact_modal::{ContactModal, ContactTrigger};
use crate::ui::icon::{Icon, icons};
use crate::ui::nav::NavBar;
use crate::ui::reveal::FadeInScript;

const SERVICES: [(&str, &str); 3] = [
    (
        "Web Design",
        "Clean, responsive sites that load fast and read well on every screen.",
    ),
    (
        "Branding",
        "Logos, palettes and type systems that make you recognisable.",
    ),
    (
        "Maintenance",
        "Updates, backups and small fixes so your site never goes stale.",
    ),
];

const PROJECTS: [(&str, &str); 3] = [
    ("Harbor Coffee", "Online ordering for a three-location cafe"),
    ("Pine Ridge Dental", "Booking-first redesign for a family practice"),
    ("Atlas Movers", "Quote calculator and lead capture"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <SeoMeta />

        <NavBar />

        <main>
            <section id="home" class="hero">
                <div class="hero__content">
                    <h1 class="hero__title">"Websites that work as hard as you do"</h1>
                    <p class="hero__subtitle">
                        "We design and build sites for small businesses, then keep them running."
                    </p>
                    <ContactTrigger id="heroContactBtn">"Start a Project"</ContactTrigger>
                </div>
            </section>

            <section id="services" class="services">
                <h2 class="section__title">"Services"</h2>
                <div class="services__grid">
                    {SERVICES
                        .into_iter()
                        .map(|(title, text)| view! {
                            <article class="services__card">
                                <h3 class="services__card-title">{title}</h3>
                                <p>{text}</p>
                            </article>
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="about" class="about">
                <h2 class="section__title">"About"</h2>
                <div class="about__grid">
                    <div class="about__box">
                        <h3>"Small team"</h3>
                        <p>"You talk to the people doing the work, every time."</p>
                    </div>
                    <div class="about__box">
                        <h3>"Plain pricing"</h3>
                        <p>"Fixed quotes up front. No surprise invoices."</p>
                    </div>
                </div>
            </section>

            <section id="projects" class="projects">
                <h2 class="section__title">"Projects"</h2>
                <div class="projects__grid">
                    {PROJECTS
                        .into_iter()
                        .map(|(name, summary)| view! {
                            <div class="projects__item">
                                <h3>{name}</h3>
                                <p>{summary}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="testimonials" class="testimonials">
                <h2 class="section__title">"What Clients Say"</h2>
                <TestimonialCarousel />
            </section>

            <section id="contact" class="contact">
                <h2 class="section__title">"Contact"</h2>
                <div class="contact__grid">
                    <div class="contact__item">
                        <Icon name=icons::MAIL class="icon-text"/>
                        <span>"hello@northwind.studio"</span>
                    </div>
                    <div class="contact__item">
                        <Icon name=icons::PHONE class="icon-text"/>
                        <span>"(555) 010-2040"</span>
                    </div>
                    <div class="contact__item">
                        <Icon name=icons::MAP_PIN class="icon-text"/>
                        <span>"Portland, OR"</span>
                    </div>
                </div>
                <ContactTrigger>"Send Us a Message"</ContactTrigger>
            </section>
        </main>

        <footer class="footer">
            <p>"© 2026 Northwind Studio"</p>
        </footer>

        <ContactModal />
        <FadeInScript />
    }
}

/// SEO meta tags using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Northwind Studio - Web Design for Small Business" />

        <Meta name="description" content="Northwind Studio designs, builds and maintains websites for small businesses." />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Northwind Studio - Web Design for Small Business" />
        <Meta property="og:description" content="Northwind Studio designs, builds and maintains websites for small businesses." />

        <Link rel="canonical" href="/" />
    }
}
