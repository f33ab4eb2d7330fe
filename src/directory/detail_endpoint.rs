//! The read-only detail view for a single user.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    alert::Alert,
    directory::{User, UserId},
    html::{LINK_STYLE, render},
};

use super::UserDirectory;

/// The state needed for the user detail view.
#[derive(Debug, Clone)]
pub struct UserDetailState {
    /// The user directory. `None` until the first successful fetch.
    pub directory: Arc<Mutex<Option<UserDirectory>>>,
}

impl FromRef<AppState> for UserDetailState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            directory: state.directory.clone(),
        }
    }
}

/// A route handler for the detail fragment of a single user, loaded into the
/// modal container over htmx.
///
/// Sections whose data is absent are omitted entirely rather than rendered
/// blank.
pub async fn get_user_detail(
    State(state): State<UserDetailState>,
    Path(user_id): Path<UserId>,
) -> Response {
    let directory = match state.directory.lock() {
        Ok(directory) => directory,
        Err(error) => {
            tracing::error!("could not acquire directory lock: {error}");
            return Error::StateLock.into_alert_response();
        }
    };

    let user = directory
        .as_ref()
        .and_then(|directory| directory.get(user_id))
        .cloned();

    match user {
        None => render(
            StatusCode::NOT_FOUND,
            Alert::error(
                "Could not display user",
                "The user could not be found. \
                Try refreshing the page to see if it has already been deleted.",
            )
            .into_html(),
        ),
        Some(user) => user_detail_view(&user).into_response(),
    }
}

/// Prefix `website` with a scheme when the source omits one, so the link is
/// not treated as a relative path.
fn website_url(website: &str) -> String {
    if website.contains("://") {
        website.to_owned()
    } else {
        format!("https://{website}")
    }
}

fn detail_field(label: &str, value: Markup) -> Markup {
    html!(
        div
        {
            dt class="text-sm text-gray-500 dark:text-gray-400" { (label) }
            dd { (value) }
        }
    )
}

fn user_detail_view(user: &User) -> Markup {
    html!(
        div
            id="user-detail"
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4"
        {
            div
                class="w-full max-w-2xl max-h-full overflow-y-auto rounded bg-white
                    p-6 shadow-xl space-y-6 text-gray-900 dark:bg-gray-800 dark:text-white"
            {
                header class="flex items-start justify-between"
                {
                    h2 class="text-xl font-bold" { "User Details" }

                    button
                        type="button"
                        class="font-bold text-gray-500 hover:text-gray-900
                            dark:hover:text-white"
                        onclick="document.getElementById('modal-container').innerHTML = ''"
                        aria-label="Close"
                    {
                        "\u{00d7}"
                    }
                }

                section
                {
                    h3 class="mb-2 font-semibold text-blue-600 dark:text-blue-500"
                    {
                        "Personal Information"
                    }

                    dl class="grid grid-cols-1 sm:grid-cols-2 gap-4"
                    {
                        (detail_field("Name", html!( (user.name) )))

                        @if let Some(username) = &user.username {
                            (detail_field("Username", html!( (username) )))
                        }

                        (detail_field("Email", html!(
                            a href=(format!("mailto:{}", user.email)) class=(LINK_STYLE)
                            {
                                (user.email)
                            }
                        )))

                        (detail_field("Phone", html!(
                            a href=(format!("tel:{}", user.phone)) class=(LINK_STYLE)
                            {
                                (user.phone)
                            }
                        )))

                        (detail_field("Website", html!(
                            a
                                href=(website_url(&user.website))
                                target="_blank"
                                rel="noopener noreferrer"
                                class=(LINK_STYLE)
                            {
                                (user.website)
                            }
                        )))
                    }
                }

                @if let Some(company) = &user.company {
                    section
                    {
                        h3 class="mb-2 font-semibold text-blue-600 dark:text-blue-500"
                        {
                            "Company"
                        }

                        dl class="grid grid-cols-1 sm:grid-cols-2 gap-4"
                        {
                            (detail_field("Name", html!( (company.name) )))

                            @if let Some(catch_phrase) = &company.catch_phrase {
                                (detail_field("Catch Phrase", html!( (catch_phrase) )))
                            }

                            @if let Some(bs) = &company.bs {
                                (detail_field("Business", html!( (bs) )))
                            }
                        }
                    }
                }

                @if let Some(address) = &user.address {
                    section
                    {
                        h3 class="mb-2 font-semibold text-blue-600 dark:text-blue-500"
                        {
                            "Address"
                        }

                        dl class="grid grid-cols-1 sm:grid-cols-2 gap-4"
                        {
                            (detail_field("Street", html!( (address.street) )))

                            @if let Some(suite) = &address.suite {
                                (detail_field("Suite", html!( (suite) )))
                            }

                            (detail_field("City", html!( (address.city) )))
                            (detail_field("Zipcode", html!( (address.zipcode) )))
                        }

                        @if let Some(map_link) = user.map_link() {
                            p class="mt-4"
                            {
                                a
                                    href=(map_link)
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class=(LINK_STYLE)
                                {
                                    "View on Map"
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use scraper::Selector;

    use crate::{
        directory::{Address, Company, Geo, User, UserDirectory},
        test_utils::{assert_valid_html, parse_html_fragment},
    };

    use super::{UserDetailState, get_user_detail, website_url};

    fn create_full_user() -> User {
        User {
            id: 1,
            name: "Leanne Graham".to_owned(),
            username: Some("Bret".to_owned()),
            email: "Sincere@april.biz".to_owned(),
            phone: "1-770-736-8031".to_owned(),
            website: "hildegard.org".to_owned(),
            company: Some(Company {
                name: "Romaguera-Crona".to_owned(),
                catch_phrase: Some("Multi-layered client-server neural-net".to_owned()),
                bs: Some("harness real-time e-markets".to_owned()),
            }),
            address: Some(Address {
                street: "Kulas Light".to_owned(),
                suite: Some("Apt. 556".to_owned()),
                city: "Gwenborough".to_owned(),
                zipcode: "92998-3874".to_owned(),
                geo: Some(Geo {
                    lat: "-37.3159".to_owned(),
                    lng: "81.1496".to_owned(),
                }),
            }),
        }
    }

    fn create_minimal_user() -> User {
        User {
            id: 2,
            name: "Ervin Howell".to_owned(),
            username: None,
            email: "Shanna@melissa.tv".to_owned(),
            phone: "010-692-6593".to_owned(),
            website: "anastasia.net".to_owned(),
            company: None,
            address: None,
        }
    }

    fn create_test_state(users: Vec<User>) -> UserDetailState {
        UserDetailState {
            directory: Arc::new(Mutex::new(Some(UserDirectory::from_users(users)))),
        }
    }

    #[tokio::test]
    async fn shows_all_sections_for_a_full_record() {
        let state = create_test_state(vec![create_full_user()]);

        let response = get_user_detail(State(state), Path(1)).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);

        let headings: Vec<String> = html
            .select(&Selector::parse("h3").unwrap())
            .map(|heading| heading.text().collect())
            .collect();
        assert_eq!(headings, ["Personal Information", "Company", "Address"]);

        let map_link = html
            .select(&Selector::parse("a[href^='https://www.google.com/maps']").unwrap())
            .next()
            .expect("No map link found");
        assert_eq!(
            map_link.value().attr("href").unwrap(),
            "https://www.google.com/maps?q=-37.3159,81.1496"
        );
    }

    #[tokio::test]
    async fn omits_absent_sections_entirely() {
        let state = create_test_state(vec![create_minimal_user()]);

        let response = get_user_detail(State(state), Path(2)).await.into_response();

        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);

        let headings: Vec<String> = html
            .select(&Selector::parse("h3").unwrap())
            .map(|heading| heading.text().collect())
            .collect();
        assert_eq!(headings, ["Personal Information"]);

        let text = html.root_element().text().collect::<String>();
        assert!(!text.contains("Username"));
        assert!(
            html.select(&Selector::parse("a[href^='https://www.google.com/maps']").unwrap())
                .next()
                .is_none()
        );
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let state = create_test_state(vec![create_minimal_user()]);

        let response = get_user_detail(State(state), Path(99)).await.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn website_url_adds_missing_scheme() {
        assert_eq!(website_url("hildegard.org"), "https://hildegard.org");
        assert_eq!(
            website_url("https://hildegard.org"),
            "https://hildegard.org"
        );
    }
}
