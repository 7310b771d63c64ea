//! API key CLI commands.

use clap::Subcommand;

use locationkit::model::{ApiKeyFilter, DescribeKeyRequest, ListKeysRequest, Status};

use super::common::{build_client, print_json};
use crate::error::CliError;

/// Keys subcommands.
#[derive(Debug, Subcommand)]
pub enum KeysAction {
    /// List API keys in the account
    List {
        /// Only list keys that have not expired
        #[arg(long)]
        active: bool,
    },

    /// Show the details of one API key
    Describe {
        /// Key resource name
        name: String,
    },
}

/// Run a keys subcommand.
pub fn run(action: KeysAction, region: Option<&str>) -> Result<(), CliError> {
    let client = build_client(region)?;

    match action {
        KeysAction::List { active } => {
            let mut request = ListKeysRequest::default();
            if active {
                request = request.with_filter(ApiKeyFilter::default().with_key_status(Status::Active));
            }

            let mut entries = Vec::new();
            for page in client.paginate(request) {
                entries.extend(page?.entries.unwrap_or_default());
            }
            print_json(&entries)
        }
        KeysAction::Describe { name } => {
            let request = DescribeKeyRequest::default().with_key_name(name);
            print_json(&client.describe_key(&request)?)
        }
    }
}
