//! Home page: hero, featured work, services preview, testimonials and the
//! latest posts.

use super::{RenderCtx, Route, blog, html_escape, portfolio};
use crate::content::{Testimonial, query};
use anyhow::Result;

pub fn render(ctx: &RenderCtx) -> Result<()> {
    let studio = &ctx.store.studio;
    let mut content = String::with_capacity(8192);

    content.push_str("<section class=\"hero\">\n");
    content.push_str(&format!("  <h1>{}</h1>\n", html_escape(&studio.name)));
    if !studio.tagline.is_empty() {
        content.push_str(&format!(
            "  <p class=\"hero-tagline\">{}</p>\n",
            html_escape(&studio.tagline),
        ));
    }
    content.push_str(&format!("  <p>{}</p>\n", html_escape(&studio.description)));
    content.push_str(&format!(
        "  <div class=\"hero-actions\">\n    <a class=\"button\" href=\"{}\">View portfolio</a>\n    <a class=\"button button-ghost\" href=\"{}\">Our services</a>\n  </div>\n",
        ctx.url(&Route::PortfolioIndex.path()),
        ctx.url(&Route::Services.path()),
    ));
    content.push_str("</section>\n");

    let featured_projects = ctx
        .store
        .featured_projects(ctx.config.build.portfolio.featured);
    if !featured_projects.is_empty() {
        content.push_str(&section_head(
            "Featured work",
            &ctx.url(&Route::PortfolioIndex.path()),
            "All projects",
        ));
        content.push_str("<div class=\"card-grid\">\n");
        for project in featured_projects {
            content.push_str(&portfolio::project_card(ctx, project));
        }
        content.push_str("</div>\n");
    }

    let services = query::featured(&ctx.store.services, 6);
    if !services.is_empty() {
        content.push_str(&section_head(
            "Services",
            &ctx.url(&Route::Services.path()),
            "All services",
        ));
        content.push_str("<div class=\"card-grid\">\n");
        for service in services {
            content.push_str(&format!(
                "  <article class=\"card service-card\" data-icon=\"{}\">\n    <div class=\"card-body\">\n      <h3>{}</h3>\n      <p>{}</p>\n      <span class=\"service-price\">{}</span>\n    </div>\n  </article>\n",
                html_escape(&service.icon),
                html_escape(&service.title),
                html_escape(&service.description),
                html_escape(&service.price),
            ));
        }
        content.push_str("</div>\n");
    }

    if !ctx.store.testimonials.is_empty() {
        content.push_str("<section class=\"home-section\">\n  <h2>Kind words</h2>\n</section>\n");
        content.push_str("<div class=\"card-grid\">\n");
        for testimonial in &ctx.store.testimonials {
            content.push_str(&testimonial_card(testimonial));
        }
        content.push_str("</div>\n");
    }

    let latest_posts = ctx.store.featured_posts(ctx.config.build.blog.featured);
    if !latest_posts.is_empty() {
        content.push_str(&section_head(
            "From the journal",
            &ctx.url(&Route::BlogIndex { page: 1 }.path()),
            "All posts",
        ));
        content.push_str("<div class=\"card-grid\">\n");
        for post in latest_posts {
            content.push_str(&blog::post_card(ctx, post));
        }
        content.push_str("</div>\n");
    }

    let title = if studio.tagline.is_empty() {
        ctx.site_name().to_string()
    } else {
        format!("{} | {}", ctx.site_name(), studio.tagline)
    };
    let html = ctx.page(&title, &studio.description, "home", &content);
    ctx.write_page(&Route::Home.path(), &html)
}

fn section_head(heading: &str, more_url: &str, more_label: &str) -> String {
    format!(
        "<section class=\"home-section\">\n  <h2>{}</h2>\n  <a class=\"more-link\" href=\"{more_url}\">{more_label}</a>\n</section>\n",
        html_escape(heading),
    )
}

/// Star rating plus quote. Ratings outside 1..=5 are clamped so a bad
/// record cannot render six stars.
pub(super) fn testimonial_card(testimonial: &Testimonial) -> String {
    let rating = testimonial.clamped_rating() as usize;
    let stars: String = "★".repeat(rating) + &"☆".repeat(5 - rating);
    format!(
        "  <figure class=\"testimonial\">\n    <div class=\"stars\" aria-label=\"Rated {rating} out of 5\">{stars}</div>\n    <blockquote>{}</blockquote>\n    <figcaption>\n      <img class=\"avatar\" src=\"{}\" alt=\"{}\" loading=\"lazy\">\n      <span>{}</span> · <span class=\"testimonial-service\">{}</span>\n    </figcaption>\n  </figure>\n",
        html_escape(&testimonial.text),
        html_escape(&testimonial.avatar),
        html_escape(&testimonial.name),
        html_escape(&testimonial.name),
        html_escape(&testimonial.service),
    )
}
