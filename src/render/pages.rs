//! About, services and not-found pages.

use super::{RenderCtx, Route, home, html_escape};
use anyhow::Result;

/// Studio profile: bios, photographer card, stats row and contact block.
pub fn render_about(ctx: &RenderCtx) -> Result<()> {
    let studio = &ctx.store.studio;
    let about = &studio.about;
    let mut content = String::with_capacity(4096);

    content.push_str("<section class=\"page-head\">\n  <h1>About</h1>\n</section>\n");
    content.push_str(&format!(
        "<section class=\"about\">\n  <p class=\"lede\">{}</p>\n  <p>{}</p>\n</section>\n",
        html_escape(&about.short_bio),
        html_escape(&about.full_bio),
    ));

    let photographer = &about.photographer;
    content.push_str("<section class=\"photographer\">\n");
    if !photographer.image.is_empty() {
        content.push_str(&format!(
            "  <img src=\"{}\" alt=\"{}\">\n",
            html_escape(&photographer.image),
            html_escape(&photographer.name),
        ));
    }
    content.push_str(&format!(
        "  <div>\n    <h2>{}</h2>\n    <p class=\"photographer-title\">{}</p>\n    <p>{}</p>\n",
        html_escape(&photographer.name),
        html_escape(&photographer.title),
        html_escape(&photographer.bio),
    ));
    if !photographer.credentials.is_empty() {
        content.push_str("    <ul class=\"credentials\">\n");
        for credential in &photographer.credentials {
            content.push_str(&format!("      <li>{}</li>\n", html_escape(credential)));
        }
        content.push_str("    </ul>\n");
    }
    content.push_str("  </div>\n</section>\n");

    let stats = &about.stats;
    content.push_str("<section class=\"stats-row\">\n");
    for (value, label) in [
        (stats.years_experience, "Years behind the lens"),
        (stats.happy_clients, "Happy clients"),
        (stats.photos_delivered, "Photos delivered"),
        (stats.awards, "Awards"),
    ] {
        content.push_str(&format!(
            "  <div class=\"stat\">\n    <span class=\"stat-value\">{value}</span>\n    <span class=\"stat-label\">{label}</span>\n  </div>\n",
        ));
    }
    content.push_str("</section>\n");

    content.push_str(&format!(
        "<section class=\"contact\">\n  <h2>Get in touch</h2>\n  <p><a href=\"mailto:{}\">{}</a></p>\n  <p><a href=\"tel:{}\">{}</a></p>\n  <p>{}</p>\n</section>\n",
        html_escape(&studio.email),
        html_escape(&studio.email),
        html_escape(&studio.phone),
        html_escape(&studio.phone),
        html_escape(&studio.address),
    ));

    let html = ctx.page(
        &format!("About | {}", ctx.site_name()),
        &about.short_bio,
        "about",
        &content,
    );
    ctx.write_page(&Route::About.path(), &html)
}

/// Service offerings, each with its feature list, price and the
/// testimonials whose service label matches the offering title.
pub fn render_services(ctx: &RenderCtx) -> Result<()> {
    let mut content = String::with_capacity(4096);
    content.push_str("<section class=\"page-head\">\n  <h1>Services</h1>\n</section>\n");

    if ctx.store.services.is_empty() {
        content.push_str("<p class=\"empty-state\">No services listed yet.</p>\n");
    }

    for service in &ctx.store.services {
        content.push_str(&format!(
            "<section class=\"service\" id=\"{}\" data-icon=\"{}\">\n",
            html_escape(&service.id),
            html_escape(&service.icon),
        ));
        if !service.image.is_empty() {
            content.push_str(&format!(
                "  <img src=\"{}\" alt=\"{}\" loading=\"lazy\">\n",
                html_escape(&service.image),
                html_escape(&service.title),
            ));
        }
        content.push_str(&format!(
            "  <div class=\"service-body\">\n    <h2>{}</h2>\n    <span class=\"service-price\">{}</span>\n    <p>{}</p>\n",
            html_escape(&service.title),
            html_escape(&service.price),
            html_escape(&service.description),
        ));
        if !service.features.is_empty() {
            content.push_str("    <ul class=\"service-features\">\n");
            for feature in &service.features {
                content.push_str(&format!("      <li>{}</li>\n", html_escape(feature)));
            }
            content.push_str("    </ul>\n");
        }

        let testimonials = ctx.store.testimonials_by_service(&service.title);
        if !testimonials.is_empty() {
            content.push_str("    <div class=\"service-testimonials\">\n");
            for testimonial in testimonials {
                content.push_str(&home::testimonial_card(testimonial));
            }
            content.push_str("    </div>\n");
        }
        content.push_str("  </div>\n</section>\n");
    }

    let html = ctx.page(
        &format!("Services | {}", ctx.site_name()),
        "Photography services and pricing.",
        "services",
        &content,
    );
    ctx.write_page(&Route::Services.path(), &html)
}

/// 404 page, emitted as a flat `404.html` for the dev server and common
/// static hosts to pick up.
pub fn render_not_found(ctx: &RenderCtx) -> Result<()> {
    let content = format!(
        "<section class=\"not-found\">\n  <h1>404</h1>\n  <p>That page is out of frame.</p>\n  <a class=\"button\" href=\"{}\">Back to the home page</a>\n</section>\n",
        ctx.url(""),
    );
    let html = ctx.page(
        &format!("Page not found | {}", ctx.site_name()),
        "The page you were looking for does not exist.",
        "",
        &content,
    );
    ctx.write_not_found(&html)
}
