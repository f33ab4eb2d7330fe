use maud::{DOCTYPE, Markup, html};

use std::sync::OnceLock;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use numfmt::{Formatter, Precision};

use crate::pagination::{
    PaginationIndicator, ResolvedPage, create_pagination_indicators, page_count, page_slice,
};

// Link styles
pub const LINK_STYLE: &str = "text-blue-600 hover:text-blue-500 \
    dark:text-blue-500 dark:hover:text-blue-400 underline";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "px-4 py-2 bg-blue-500
    dark:bg-blue-600 disabled:bg-blue-700 hover:enabled:bg-blue-600 \
    hover:enabled:dark:bg-blue-700 text-white rounded";

pub const BUTTON_DELETE_STYLE: &str = "text-red-600 hover:text-red-500 \
    dark:text-red-500 dark:hover:text-red-400 underline bg-transparent \
    border-none cursor-pointer";

// Form styles
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white disabled:text-gray-500 bg-gray-50 \
    dark:bg-gray-700 border border-gray-300 dark:border-gray-600 \
    dark:placeholder-gray-400 focus:ring-blue-600 focus:border-blue-600 \
    focus:dark:border-blue-500 focus:dark:ring-blue-500";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs text-gray-700 uppercase \
    bg-gray-50 dark:bg-gray-700 dark:text-gray-400";

pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";

pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Pagination styles
pub const PAGE_BUTTON_STYLE: &str = "px-3 py-1.5 text-sm rounded border \
    border-gray-300 bg-white text-gray-700 hover:bg-gray-100 \
    dark:border-gray-600 dark:bg-gray-800 dark:text-gray-300 \
    dark:hover:bg-gray-700";

pub const PAGE_BUTTON_ACTIVE_STYLE: &str = "px-3 py-1.5 text-sm rounded border \
    border-blue-600 bg-blue-600 text-white dark:border-blue-500 \
    dark:bg-blue-600";

pub const PAGE_BUTTON_DISABLED_STYLE: &str = "px-3 py-1.5 text-sm rounded border \
    border-gray-200 bg-gray-100 text-gray-400 cursor-not-allowed \
    dark:border-gray-700 dark:bg-gray-800 dark:text-gray-600";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col items-center px-6 py-8 mx-auto lg:py-5 text-gray-900 dark:text-white";

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Tally" }

                script src="https://cdn.tailwindcss.com" {}
                script src="https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js" {}
                script src="https://unpkg.com/htmx-ext-response-targets@2.0.4/response-targets.js" {}

                style
                {
                    r#"
                    .htmx-indicator {
                        display: none;
                    }

                    .htmx-request .htmx-indicator {
                        display: inline;
                    }

                    .htmx-request.htmx-indicator {
                        display: inline;
                    }
                    "#
                }
            }

            body
                hx-ext="response-targets"
                class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)

                // Target for the user detail fragment loaded over htmx
                div id="modal-container" {}

                // Alert container for out-of-band swaps
                div
                    id="alert-container"
                    class="hidden w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {}
            }
        }
    }
}

/// Render `markup` as an HTML response with the given status code.
pub fn render(status_code: StatusCode, markup: Markup) -> Response {
    (status_code, markup).into_response()
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-600 dark:text-blue-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-blue-600
                            hover:bg-blue-800 focus:ring-4 focus:outline-hidden
                            focus:ring-blue-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-blue-900 my-4"
                    {
                        "Back to Homepage"
                    }
                }
            }
        }
    );

    base(title, &content)
}

pub fn loading_spinner() -> Markup {
    // Spinner SVG adapted from https://flowbite.com/docs/components/spinner/
    html! {
        svg
            aria-hidden="true"
            role="status"
            class="htmx-indicator inline text-blue-600 w-4 h-4 me-2 mb-1 animate-spin"
            viewBox="0 0 100 101"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        {
            path
                d="M100 50.5908C100 78.2051 77.6142 100.591 50 100.591C22.3858 100.591 0 78.2051 0 50.5908C0 22.9766 22.3858 0.59082 50 0.59082C77.6142 0.59082 100 22.9766 100 50.5908ZM9.08144 50.5908C9.08144 73.1895 27.4013 91.5094 50 91.5094C72.5987 91.5094 90.9186 73.1895 90.9186 50.5908C90.9186 27.9921 72.5987 9.67226 50 9.67226C27.4013 9.67226 9.08144 27.9921 9.08144 50.5908Z"
                fill="#E5E7EB" {}
            path
                d="M93.9676 39.0409C96.393 38.4038 97.8624 35.9116 97.0079 33.5539C95.2932 28.8227 92.871 24.3692 89.8167 20.348C85.8452 15.1192 80.8826 10.7238 75.2124 7.41289C69.5422 4.10194 63.2754 1.94025 56.7698 1.05124C51.7666 0.367541 46.6976 0.446843 41.7345 1.27873C39.2613 1.69328 37.813 4.19778 38.4501 6.62326C39.0873 9.04874 41.5694 10.4717 44.0505 10.1071C47.8511 9.54855 51.7191 9.52689 55.5402 10.0491C60.8642 10.7766 65.9928 12.5457 70.6331 15.2552C75.2735 17.9648 79.3347 21.5619 82.5849 25.841C84.9175 28.9121 86.7997 32.2913 88.1811 35.8758C89.083 38.2158 91.5421 39.6781 93.9676 39.0409Z"
                fill="currentColor" {}
        }
    }
}

/// Format a non-negative amount as a currency string with thousands
/// separators and two decimal places, e.g. `$1,070.00`.
pub fn format_currency(amount: f64) -> String {
    static FMT: OnceLock<Formatter> = OnceLock::new();

    let fmt = FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    if amount == 0.0 {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        return "$0.00".to_owned();
    }

    let mut formatted_string = fmt.fmt_string(amount);

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}

/// The pagination footer shared by both table views.
///
/// Renders First/Previous/page-number/Next/Last controls, a rows-per-page
/// input that resets the view to page 1, and a "Showing X-Y of Z" range
/// label. Controls that would navigate to the current page are rendered as
/// disabled buttons rather than links.
pub fn pagination_nav(
    route: &str,
    resolved: ResolvedPage,
    count: usize,
    max_pages: u64,
    noun: &str,
) -> Markup {
    let total_pages = page_count(count, resolved.per_page);
    let indicators = create_pagination_indicators(resolved.page, total_pages, max_pages);

    let link_to = |page: u64| {
        ResolvedPage {
            page,
            per_page: resolved.per_page,
        }
        .to_url(route)
    };

    let nav_button = |label: &str, target: u64| {
        if target == resolved.page {
            html!( span class=(PAGE_BUTTON_DISABLED_STYLE) { (label) } )
        } else {
            html!( a href=(link_to(target)) class=(PAGE_BUTTON_STYLE) { (label) } )
        }
    };

    let slice = page_slice(count, resolved.per_page, resolved.page);
    let range_label = if count == 0 {
        format!("Showing 0 of 0 {noun}")
    } else {
        format!(
            "Showing {}-{} of {} {}",
            slice.start + 1,
            slice.end,
            count,
            noun
        )
    };

    html!(
        div class="flex flex-wrap items-center justify-between gap-4 px-6 py-4
            bg-gray-50 dark:bg-gray-700 border-t border-gray-200 dark:border-gray-600"
        {
            nav class="flex flex-wrap items-center gap-2" aria-label="Pagination"
            {
                @for indicator in &indicators {
                    @match indicator {
                        PaginationIndicator::FirstButton => { (nav_button("First", 1)) }
                        PaginationIndicator::BackButton(page) => { (nav_button("Previous", *page)) }
                        PaginationIndicator::Page(page) => {
                            a href=(link_to(*page)) class=(PAGE_BUTTON_STYLE) { (page) }
                        }
                        PaginationIndicator::CurrPage(page) => {
                            span class=(PAGE_BUTTON_ACTIVE_STYLE) aria-current="page" { (page) }
                        }
                        PaginationIndicator::NextButton(page) => { (nav_button("Next", *page)) }
                        PaginationIndicator::LastButton(page) => { (nav_button("Last", *page)) }
                    }
                }
            }

            div class="flex items-center gap-3"
            {
                form method="get" action=(route) class="inline-flex items-center"
                {
                    input type="hidden" name="page" value="1";
                    input
                        type="number"
                        name="per_page"
                        value=(resolved.per_page)
                        min="1"
                        onchange="this.form.submit()"
                        class="w-16 p-2 rounded border border-gray-300 text-center text-sm
                            dark:border-gray-600 dark:bg-gray-700 dark:text-white";
                }

                span class="text-sm text-gray-500 dark:text-gray-400" { (range_label) }
            }
        }
    )
}

#[cfg(test)]
mod pagination_nav_tests {
    use scraper::{Html, Selector};

    use crate::{html::pagination_nav, pagination::ResolvedPage};

    #[test]
    fn first_page_disables_backward_navigation() {
        let resolved = ResolvedPage {
            page: 1,
            per_page: 5,
        };

        let markup = pagination_nav("/expenses", resolved, 12, 5, "expenses");
        let html = Html::parse_fragment(&markup.into_string());

        let links: Vec<String> = html
            .select(&Selector::parse("nav a").unwrap())
            .map(|a| a.text().collect())
            .collect();
        let disabled: Vec<String> = html
            .select(&Selector::parse("nav span").unwrap())
            .map(|span| span.text().collect())
            .collect();

        // "First" and "Previous" are not links on page 1, and neither is the
        // current page number.
        assert_eq!(links, ["2", "3", "Next", "Last"]);
        assert_eq!(disabled, ["First", "Previous", "1"]);
    }

    #[test]
    fn shows_row_range_label() {
        let resolved = ResolvedPage {
            page: 2,
            per_page: 10,
        };

        let markup = pagination_nav("/users", resolved, 15, 5, "users");
        let text = markup.into_string();

        assert!(text.contains("Showing 11-15 of 15 users"), "got {text}");
    }

    #[test]
    fn empty_collection_shows_zero_range() {
        let resolved = ResolvedPage {
            page: 1,
            per_page: 5,
        };

        let markup = pagination_nav("/expenses", resolved, 0, 5, "expenses");
        let text = markup.into_string();

        assert!(text.contains("Showing 0 of 0 expenses"), "got {text}");
    }
}
