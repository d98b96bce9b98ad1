//! Display model for a loaded config.
//!
//! Builds the labelled lines shown to the operator. Secrets only ever appear
//! in masked form.

use crate::core::config::{ApiKeys, Config, Secret};

/// Suffix appended to masked secrets.
const LOADED: &str = "(loaded successfully)";

/// One labelled line of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

impl Field {
    fn plain(label: &'static str, value: impl ToString) -> Self {
        Self {
            label,
            value: value.to_string(),
        }
    }

    fn secret(label: &'static str, secret: &Secret) -> Self {
        Self {
            label,
            value: format!("{} {}", secret.masked(), LOADED),
        }
    }
}

/// Selects one of the credentials in `api_keys`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKey {
    Stripe,
    Sendgrid,
    Aws,
}

impl ApiKey {
    pub const ALL: [ApiKey; 3] = [ApiKey::Stripe, ApiKey::Sendgrid, ApiKey::Aws];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Stripe => "Stripe API Key",
            Self::Sendgrid => "SendGrid API Key",
            Self::Aws => "AWS Access Key",
        }
    }

    pub fn select<'a>(&self, keys: &'a ApiKeys) -> &'a Secret {
        match self {
            Self::Stripe => &keys.stripe_key,
            Self::Sendgrid => &keys.sendgrid_key,
            Self::Aws => &keys.aws_access_key,
        }
    }
}

fn common(config: &Config) -> Vec<Field> {
    vec![
        Field::plain("Application Name", &config.application.name),
        Field::plain("Environment", &config.application.environment),
        Field::plain("Port", config.application.port),
        Field::plain("Database Host", &config.database.host),
        Field::plain("Database Username", &config.database.username),
        Field::secret("Database Password", &config.database.password),
    ]
}

/// Summary with a single API key, as shown by the built-in examples.
pub fn summary(config: &Config, key: ApiKey) -> Vec<Field> {
    let mut fields = common(config);
    fields.push(Field::secret(key.label(), key.select(&config.api_keys)));
    fields
}

/// Summary with every field, secrets masked.
pub fn full_summary(config: &Config) -> Vec<Field> {
    let mut fields = common(config);
    fields.insert(4, Field::plain("Database Port", config.database.port));
    fields.insert(6, Field::plain("Database Name", &config.database.database));
    for key in ApiKey::ALL {
        fields.push(Field::secret(key.label(), key.select(&config.api_keys)));
    }
    fields
}
