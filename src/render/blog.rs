//! Blog pages: paginated index, category pages and post details.

use super::{RenderCtx, Route, display_date, html_escape};
use crate::content::{ALL_CATEGORIES, BlogPost, Page, SortOrder, query};
use anyhow::{Context, Result};

/// Paginated blog index, all categories.
pub fn render_index(ctx: &RenderCtx, page: usize) -> Result<()> {
    let posts = ctx.store.posts_by_date(SortOrder::Desc);
    let paged = query::paginate(&posts, page, ctx.config.build.blog.posts_per_page);

    let content = listing(ctx, "Blog", ALL_CATEGORIES, &paged, |p| {
        Route::BlogIndex { page: p }
    });
    let html = ctx.page(
        &format!("Blog | {}", ctx.site_name()),
        "Stories, sessions and notes from the studio.",
        "blog",
        &content,
    );
    ctx.write_page(&Route::BlogIndex { page }.path(), &html)
}

/// Paginated index restricted to one category.
pub fn render_category(ctx: &RenderCtx, category: &str, page: usize) -> Result<()> {
    let filtered = ctx.store.posts_by_category(category);
    let sorted = query::sort_by_date(&filtered, SortOrder::Desc);
    let paged = query::paginate(&sorted, page, ctx.config.build.blog.posts_per_page);

    let content = listing(ctx, category, category, &paged, |p| Route::BlogCategory {
        category: category.to_string(),
        page: p,
    });
    let html = ctx.page(
        &format!("{category} | Blog | {}", ctx.site_name()),
        &format!("{category} posts from the studio journal."),
        "blog",
        &content,
    );
    ctx.write_page(
        &Route::BlogCategory {
            category: category.to_string(),
            page,
        }
        .path(),
        &html,
    )
}

/// A single post with byline, body paragraphs, tags and related posts.
pub fn render_post(ctx: &RenderCtx, slug: &str) -> Result<()> {
    let post = ctx
        .store
        .post_by_slug(slug)
        .with_context(|| format!("unknown post slug: {slug}"))?;

    let mut content = String::with_capacity(4096);
    content.push_str("<article class=\"post\">\n");
    content.push_str(&format!(
        "  <a class=\"badge\" href=\"{}\">{}</a>\n",
        ctx.url(
            &Route::BlogCategory {
                category: post.category.clone(),
                page: 1
            }
            .path()
        ),
        html_escape(&post.category),
    ));
    content.push_str(&format!("  <h1>{}</h1>\n", html_escape(&post.title)));
    content.push_str(&byline(post));
    if !post.image.is_empty() {
        content.push_str(&format!(
            "  <img class=\"post-hero\" src=\"{}\" alt=\"{}\">\n",
            html_escape(&post.image),
            html_escape(&post.title),
        ));
    }
    for paragraph in post.paragraphs() {
        content.push_str(&format!("  <p>{}</p>\n", html_escape(paragraph)));
    }
    if !post.tags.is_empty() {
        content.push_str("  <ul class=\"tag-list\">\n");
        for tag in &post.tags {
            content.push_str(&format!("    <li>{}</li>\n", html_escape(tag)));
        }
        content.push_str("  </ul>\n");
    }
    content.push_str("</article>\n");

    let related = ctx
        .store
        .related_posts(&post.id, &post.category, ctx.config.build.blog.related);
    if !related.is_empty() {
        content.push_str("<section class=\"related\">\n  <h2>Related posts</h2>\n  <div class=\"card-grid\">\n");
        for other in related {
            content.push_str(&post_card(ctx, other));
        }
        content.push_str("  </div>\n</section>\n");
    }

    let html = ctx.page(
        &format!("{} | {}", post.title, ctx.site_name()),
        &post.excerpt,
        "blog",
        &content,
    );
    ctx.write_page(
        &Route::BlogPost {
            slug: slug.to_string(),
        }
        .path(),
        &html,
    )
}

/// Index/category listing: heading, search box, category strip, card grid
/// and pager.
fn listing(
    ctx: &RenderCtx,
    heading: &str,
    active_category: &str,
    paged: &Page<'_, BlogPost>,
    page_route: impl Fn(usize) -> Route,
) -> String {
    let mut content = String::with_capacity(4096);
    content.push_str("<section class=\"page-head\">\n");
    content.push_str(&format!("  <h1>{}</h1>\n", html_escape(heading)));
    content.push_str(&search_box(ctx, active_category));
    content.push_str("</section>\n");
    content.push_str(&category_strip(ctx, active_category));

    if paged.items.is_empty() {
        content.push_str("<p class=\"empty-state\">No posts yet.</p>\n");
    } else {
        content.push_str("<div class=\"card-grid\">\n");
        for post in &paged.items {
            content.push_str(&post_card(ctx, post));
        }
        content.push_str("</div>\n");
    }

    content.push_str(&pager(ctx, paged, page_route));
    content
}

/// Client-side search input, wired to the generated index by data
/// attributes. Omitted entirely when the search index is disabled.
fn search_box(ctx: &RenderCtx, active_category: &str) -> String {
    if !ctx.config.build.search.enable {
        return String::new();
    }
    let index_name = ctx
        .config
        .build
        .search
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "search-index.json".to_string());

    format!(
        "  <div class=\"search\">\n    <input type=\"search\" placeholder=\"Search posts\" aria-label=\"Search posts\" data-search data-category=\"{}\" data-blog-url=\"{}\" data-index-url=\"{}\">\n    <ul class=\"search-results\" data-search-results hidden></ul>\n  </div>\n",
        html_escape(active_category),
        ctx.url("blog"),
        ctx.file_url(&index_name),
    )
}

/// Category tab strip; "All" links back to the unfiltered index.
fn category_strip(ctx: &RenderCtx, active: &str) -> String {
    let mut strip = String::from("<nav class=\"category-strip\" aria-label=\"Post categories\">\n");
    let all_current = if active == ALL_CATEGORIES {
        " aria-current=\"true\""
    } else {
        ""
    };
    strip.push_str(&format!(
        "  <a href=\"{}\"{all_current}>{ALL_CATEGORIES}</a>\n",
        ctx.url("blog"),
    ));
    for category in ctx.store.categories() {
        let current = if category == active {
            " aria-current=\"true\""
        } else {
            ""
        };
        strip.push_str(&format!(
            "  <a href=\"{}\"{current}>{}</a>\n",
            ctx.url(
                &Route::BlogCategory {
                    category: category.to_string(),
                    page: 1
                }
                .path()
            ),
            html_escape(category),
        ));
    }
    strip.push_str("</nav>\n");
    strip
}

/// One post in a card grid. Shared with the home page and related lists.
pub(super) fn post_card(ctx: &RenderCtx, post: &BlogPost) -> String {
    let url = ctx.url(
        &Route::BlogPost {
            slug: post.slug.clone(),
        }
        .path(),
    );
    format!(
        "  <article class=\"card\">\n    <a href=\"{url}\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></a>\n    <div class=\"card-body\">\n      <span class=\"badge\">{}</span>\n      <h3><a href=\"{url}\">{}</a></h3>\n      <p>{}</p>\n      <footer class=\"card-meta\">{} · {}</footer>\n    </div>\n  </article>\n",
        html_escape(&post.image),
        html_escape(&post.title),
        html_escape(&post.category),
        html_escape(&post.title),
        html_escape(&post.excerpt),
        display_date(&post.date),
        html_escape(&post.read_time),
    )
}

fn byline(post: &BlogPost) -> String {
    format!(
        "  <div class=\"byline\">\n    <img class=\"avatar\" src=\"{}\" alt=\"{}\">\n    <div>\n      <span class=\"byline-name\">{}</span><br>\n      <span class=\"byline-meta\">{} · {}</span>\n    </div>\n  </div>\n",
        html_escape(&post.author_avatar),
        html_escape(&post.author),
        html_escape(&post.author),
        display_date(&post.date),
        html_escape(&post.read_time),
    )
}

/// Previous/next plus numbered page links. Bound links render as inert
/// spans instead of disappearing, so the pager keeps its shape.
fn pager(
    ctx: &RenderCtx,
    paged: &Page<'_, BlogPost>,
    page_route: impl Fn(usize) -> Route,
) -> String {
    if paged.total_pages <= 1 {
        return String::new();
    }

    let mut nav = String::from("<nav class=\"pager\" aria-label=\"Pagination\">\n");
    if paged.has_prev {
        nav.push_str(&format!(
            "  <a href=\"{}\">Previous</a>\n",
            ctx.url(&page_route(paged.current_page - 1).path()),
        ));
    } else {
        nav.push_str("  <span class=\"disabled\">Previous</span>\n");
    }

    for number in 1..=paged.total_pages {
        if number == paged.current_page {
            nav.push_str(&format!(
                "  <span class=\"current\" aria-current=\"page\">{number}</span>\n"
            ));
        } else {
            nav.push_str(&format!(
                "  <a href=\"{}\">{number}</a>\n",
                ctx.url(&page_route(number).path()),
            ));
        }
    }

    if paged.has_next {
        nav.push_str(&format!(
            "  <a href=\"{}\">Next</a>\n",
            ctx.url(&page_route(paged.current_page + 1).path()),
        ));
    } else {
        nav.push_str("  <span class=\"disabled\">Next</span>\n");
    }
    nav.push_str("</nav>\n");
    nav
}
