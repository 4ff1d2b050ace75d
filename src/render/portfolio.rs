//! Portfolio pages: category-filtered grids and project details with a
//! gallery lightbox.
//!
//! All lightbox navigation is precomputed here with [`Lightbox`]: each
//! slide carries its own prev/next target and counter label as data
//! attributes, so the client script only follows them.

use super::{RenderCtx, Route, display_date, html_escape};
use crate::content::{ALL_CATEGORIES, Lightbox, PortfolioProject};
use anyhow::{Context, Result};

/// Unfiltered portfolio grid.
pub fn render_index(ctx: &RenderCtx) -> Result<()> {
    let projects: Vec<&PortfolioProject> = ctx.store.projects.iter().collect();
    let content = grid(ctx, "Portfolio", ALL_CATEGORIES, &projects);
    let html = ctx.page(
        &format!("Portfolio | {}", ctx.site_name()),
        "Selected work from the studio.",
        "portfolio",
        &content,
    );
    ctx.write_page(&Route::PortfolioIndex.path(), &html)
}

/// Portfolio grid restricted to one category.
pub fn render_category(ctx: &RenderCtx, category: &str) -> Result<()> {
    let projects = ctx.store.projects_by_category(category);
    let content = grid(ctx, category, category, &projects);
    let html = ctx.page(
        &format!("{category} | Portfolio | {}", ctx.site_name()),
        &format!("{category} projects from the studio."),
        "portfolio",
        &content,
    );
    ctx.write_page(
        &Route::PortfolioCategory {
            category: category.to_string(),
        }
        .path(),
        &html,
    )
}

/// One project: description, client and date, tags, gallery with lightbox.
pub fn render_project(ctx: &RenderCtx, slug: &str) -> Result<()> {
    let project = ctx
        .store
        .project_by_slug(slug)
        .with_context(|| format!("unknown project slug: {slug}"))?;

    let mut content = String::with_capacity(4096);
    content.push_str("<article class=\"project\">\n");
    content.push_str(&format!(
        "  <a class=\"badge\" href=\"{}\">{}</a>\n",
        ctx.url(
            &Route::PortfolioCategory {
                category: project.category.clone()
            }
            .path()
        ),
        html_escape(&project.category),
    ));
    content.push_str(&format!("  <h1>{}</h1>\n", html_escape(&project.title)));
    content.push_str(&format!(
        "  <p class=\"project-meta\">{} · {}</p>\n",
        html_escape(&project.client),
        display_date(&project.date),
    ));
    content.push_str(&format!(
        "  <p class=\"project-description\">{}</p>\n",
        html_escape(&project.description),
    ));
    if !project.tags.is_empty() {
        content.push_str("  <ul class=\"tag-list\">\n");
        for tag in &project.tags {
            content.push_str(&format!("    <li>{}</li>\n", html_escape(tag)));
        }
        content.push_str("  </ul>\n");
    }
    content.push_str(&gallery(project));
    content.push_str("</article>\n");

    let html = ctx.page(
        &format!("{} | Portfolio | {}", project.title, ctx.site_name()),
        &project.description,
        "portfolio",
        &content,
    );
    ctx.write_page(
        &Route::PortfolioProject {
            slug: slug.to_string(),
        }
        .path(),
        &html,
    )
}

/// Category page heading, tab strip and project cards.
fn grid(
    ctx: &RenderCtx,
    heading: &str,
    active_category: &str,
    projects: &[&PortfolioProject],
) -> String {
    let mut content = String::with_capacity(4096);
    content.push_str(&format!(
        "<section class=\"page-head\">\n  <h1>{}</h1>\n</section>\n",
        html_escape(heading),
    ));
    content.push_str(&category_strip(ctx, active_category));

    if projects.is_empty() {
        content.push_str("<p class=\"empty-state\">No projects yet.</p>\n");
    } else {
        content.push_str("<div class=\"card-grid\">\n");
        for project in projects {
            content.push_str(&project_card(ctx, project));
        }
        content.push_str("</div>\n");
    }
    content
}

fn category_strip(ctx: &RenderCtx, active: &str) -> String {
    let mut strip =
        String::from("<nav class=\"category-strip\" aria-label=\"Project categories\">\n");
    for category in ctx.store.portfolio_categories() {
        let current = if category == active {
            " aria-current=\"true\""
        } else {
            ""
        };
        let href = if category == ALL_CATEGORIES {
            ctx.url(&Route::PortfolioIndex.path())
        } else {
            ctx.url(
                &Route::PortfolioCategory {
                    category: category.to_string(),
                }
                .path(),
            )
        };
        strip.push_str(&format!(
            "  <a href=\"{href}\"{current}>{}</a>\n",
            html_escape(category),
        ));
    }
    strip.push_str("</nav>\n");
    strip
}

/// One project in a card grid. Shared with the home page.
pub(super) fn project_card(ctx: &RenderCtx, project: &PortfolioProject) -> String {
    let url = ctx.url(
        &Route::PortfolioProject {
            slug: project.slug.clone(),
        }
        .path(),
    );
    format!(
        "  <article class=\"card\">\n    <a href=\"{url}\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></a>\n    <div class=\"card-body\">\n      <span class=\"badge\">{}</span>\n      <h3><a href=\"{url}\">{}</a></h3>\n      <p>{}</p>\n    </div>\n  </article>\n",
        html_escape(&project.image),
        html_escape(&project.title),
        html_escape(&project.category),
        html_escape(&project.title),
        html_escape(&project.description),
    )
}

/// Thumbnail grid plus the lightbox overlay.
///
/// Every slide carries `data-prev`/`data-next` indices and a "N of M"
/// counter computed with circular wrapping; single-image galleries get
/// no prev/next controls at all.
fn gallery(project: &PortfolioProject) -> String {
    let len = project.images.len();
    let mut out = String::with_capacity(1024);
    out.push_str("  <div data-lightbox-root>\n    <div class=\"gallery-grid\">\n");
    for (i, image) in project.images.iter().enumerate() {
        out.push_str(&format!(
            "      <button type=\"button\" class=\"gallery-thumb\" data-lightbox-open=\"{i}\" aria-label=\"Open photo {} of {len}\"><img src=\"{}\" alt=\"{} photo {}\" loading=\"lazy\"></button>\n",
            i + 1,
            html_escape(image),
            html_escape(&project.title),
            i + 1,
        ));
    }
    out.push_str("    </div>\n    <div class=\"lightbox\" data-lightbox hidden>\n");
    out.push_str(
        "      <button type=\"button\" class=\"lightbox-close\" data-lightbox-close aria-label=\"Close\">&times;</button>\n",
    );
    if len > 1 {
        out.push_str(
            "      <button type=\"button\" class=\"lightbox-prev\" data-lightbox-prev aria-label=\"Previous photo\">&#8249;</button>\n",
        );
        out.push_str(
            "      <button type=\"button\" class=\"lightbox-next\" data-lightbox-next aria-label=\"Next photo\">&#8250;</button>\n",
        );
    }
    for (i, image) in project.images.iter().enumerate() {
        let state = Lightbox::at(len, i);
        let hidden = if i == 0 { "" } else { " hidden" };
        out.push_str(&format!(
            "      <figure class=\"lightbox-slide\" data-index=\"{i}\" data-prev=\"{}\" data-next=\"{}\"{hidden}>\n        <img src=\"{}\" alt=\"{} photo {}\">\n        <figcaption>{}</figcaption>\n      </figure>\n",
            state.prev_index(),
            state.next_index(),
            html_escape(image),
            html_escape(&project.title),
            i + 1,
            state.counter_label(),
        ));
    }
    out.push_str("    </div>\n  </div>\n");
    out
}
