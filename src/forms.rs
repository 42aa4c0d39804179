use crate::events::EventType;
use crate::options;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in {0}")]
    Required(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Unknown {field}: {key}")]
    UnknownOption { field: &'static str, key: String },
}

/// Loose shape check: something@domain.tld with no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.rsplit_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain
                    .split_once('.')
                    .map_or(false, |(host, _)| !host.is_empty())
                && !domain.ends_with('.')
        }
        None => false,
    }
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::Required(field));
    }
    Ok(value.to_string())
}

fn email(value: &str) -> Result<String, FormError> {
    let value = required("email", value)?;
    if !is_valid_email(&value) {
        return Err(FormError::InvalidEmail);
    }
    Ok(value)
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactRequest, FormError> {
        let service = match optional(&self.service) {
            Some(key) => Some(
                options::resolve(options::SERVICES, &key)
                    .map(|o| o.key.to_string())
                    .ok_or(FormError::UnknownOption { field: "service", key })?,
            ),
            None => None,
        };
        Ok(ContactRequest {
            name: required("name", &self.name)?,
            email: email(&self.email)?,
            company: optional(&self.company),
            service,
            message: required("message", &self.message)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubscriptionForm {
    pub email: String,
    pub persona: String,
    pub event_type: Option<EventType>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventSubscriptionRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,
}

impl SubscriptionForm {
    pub fn validate(&self) -> Result<EventSubscriptionRequest, FormError> {
        let persona = optional(&self.persona).filter(|p| p != "all");
        if let Some(key) = &persona {
            if options::resolve(options::PERSONAS, key).is_none() {
                return Err(FormError::UnknownOption {
                    field: "persona",
                    key: key.clone(),
                });
            }
        }
        Ok(EventSubscriptionRequest {
            email: email(&self.email)?,
            persona,
            event_type: self.event_type,
        })
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct UnsubscribeRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl UnsubscribeRequest {
    /// Reads `email` and `token` from a page query string such as
    /// `?email=jane%40example.com&token=abc`.
    pub fn from_query(query: &str) -> Result<Self, FormError> {
        let mut email_param = None;
        let mut token = None;
        for pair in query.trim_start_matches('?').split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = match urlencoding::decode(value) {
                Ok(value) => value.into_owned(),
                Err(err) => {
                    log::warn!("Skipping undecodable query parameter {}: {}", key, err);
                    continue;
                }
            };
            match key {
                "email" => email_param = Some(value),
                "token" => token = optional(&value),
                _ => {}
            }
        }
        Ok(Self {
            email: email(email_param.as_deref().unwrap_or_default())?,
            token,
        })
    }

    pub fn from_email(address: &str) -> Result<Self, FormError> {
        Ok(Self {
            email: email(address)?,
            token: None,
        })
    }
}
