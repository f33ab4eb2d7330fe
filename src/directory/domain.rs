//! Core user directory domain types.
//!
//! These mirror the JSON shape of the remote users endpoint. The nested
//! `company`, `address` and `geo` sections may be absent at any level, so
//! every consumer goes through optional fields and short-circuiting
//! accessors rather than assuming presence.

use serde::{Deserialize, Serialize};

/// Identifier for a user, assigned by the remote source.
pub type UserId = i64;

/// A single user record, fetched once from the remote users endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// The unique, externally assigned identifier.
    pub id: UserId,
    /// The user's full name.
    pub name: String,
    /// The user's handle, when the source provides one.
    #[serde(default)]
    pub username: Option<String>,
    /// The user's email address.
    pub email: String,
    /// The user's phone number, as formatted by the source.
    pub phone: String,
    /// The user's website.
    pub website: String,
    /// The company the user works for.
    #[serde(default)]
    pub company: Option<Company>,
    /// The user's postal address.
    #[serde(default)]
    pub address: Option<Address>,
}

/// The company section of a user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// The company name.
    pub name: String,
    /// The company slogan.
    #[serde(default)]
    pub catch_phrase: Option<String>,
    /// The company line of business.
    #[serde(default)]
    pub bs: Option<String>,
}

/// The address section of a user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// Street name and number.
    pub street: String,
    /// Apartment or suite, when present.
    #[serde(default)]
    pub suite: Option<String>,
    /// City name.
    pub city: String,
    /// Postal code.
    pub zipcode: String,
    /// Geographic coordinates, when present.
    #[serde(default)]
    pub geo: Option<Geo>,
}

/// Geographic coordinates, kept as the raw strings the source sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    /// Latitude.
    pub lat: String,
    /// Longitude.
    pub lng: String,
}

impl User {
    /// A maps query URL for the user's location.
    ///
    /// Returns `None` unless the address and both coordinates are present.
    /// The raw coordinate values are passed through unchanged.
    pub fn map_link(&self) -> Option<String> {
        let geo = self.address.as_ref()?.geo.as_ref()?;

        Some(format!(
            "https://www.google.com/maps?q={},{}",
            geo.lat, geo.lng
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::directory::domain::{Address, Geo, User};

    fn create_test_user() -> User {
        User {
            id: 1,
            name: "Leanne Graham".to_owned(),
            username: Some("Bret".to_owned()),
            email: "Sincere@april.biz".to_owned(),
            phone: "1-770-736-8031".to_owned(),
            website: "hildegard.org".to_owned(),
            company: None,
            address: None,
        }
    }

    #[test]
    fn map_link_requires_geo() {
        let mut user = create_test_user();
        assert_eq!(user.map_link(), None);

        user.address = Some(Address {
            street: "Kulas Light".to_owned(),
            suite: None,
            city: "Gwenborough".to_owned(),
            zipcode: "92998-3874".to_owned(),
            geo: None,
        });
        assert_eq!(user.map_link(), None);
    }

    #[test]
    fn map_link_uses_raw_coordinates() {
        let mut user = create_test_user();
        user.address = Some(Address {
            street: "Kulas Light".to_owned(),
            suite: Some("Apt. 556".to_owned()),
            city: "Gwenborough".to_owned(),
            zipcode: "92998-3874".to_owned(),
            geo: Some(Geo {
                lat: "-37.3159".to_owned(),
                lng: "81.1496".to_owned(),
            }),
        });

        assert_eq!(
            user.map_link(),
            Some("https://www.google.com/maps?q=-37.3159,81.1496".to_owned())
        );
    }

    #[test]
    fn deserializes_record_with_missing_optional_sections() {
        let json = r#"{
            "id": 3,
            "name": "Clementine Bauch",
            "email": "Nathan@yesenia.net",
            "phone": "1-463-123-4447",
            "website": "ramiro.info"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, 3);
        assert_eq!(user.username, None);
        assert_eq!(user.company, None);
        assert_eq!(user.address, None);
    }

    #[test]
    fn deserializes_camel_case_company_fields() {
        let json = r#"{
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }"#;

        let company: crate::directory::domain::Company = serde_json::from_str(json).unwrap();

        assert_eq!(
            company.catch_phrase.as_deref(),
            Some("Multi-layered client-server neural-net")
        );
    }
}
