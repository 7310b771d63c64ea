//! API key lifecycle.
//!
//! API keys grant unauthenticated clients (browsers, mobile apps) access to
//! a restricted set of map, place and route actions.

use super::{StringMap, Timestamp};

string_enum! {
    pub enum Status {
        Active => "Active",
        Expired => "Expired",
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct AndroidApp {
        "Package" package: String,
        /// SHA-1 signing certificate fingerprint, colon separated hex.
        "CertificateFingerprint" certificate_fingerprint: String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct AppleApp {
        "BundleId" bundle_id: String,
    }
}

model! {
    /// What an API key may be used for.
    #[derive(Eq, Hash)]
    pub struct ApiKeyRestrictions {
        /// Actions such as `geo:GetMap*` or `geo:SearchPlaceIndexForText`.
        "AllowActions" allow_actions: Vec<String>,
        /// Resource ARNs, wildcards allowed in the resource name.
        "AllowResources" allow_resources: Vec<String>,
        /// HTTP referer patterns, e.g. `https://example.com/*`.
        "AllowReferers" allow_referers: Vec<String>,
        "AllowAndroidApps" allow_android_apps: Vec<AndroidApp>,
        "AllowAppleApps" allow_apple_apps: Vec<AppleApp>,
    }
}

model! {
    /// Creates an API key. Either `ExpireTime` or `NoExpiry` must be set.
    #[derive(Eq, Hash)]
    pub struct CreateKeyRequest {
        "KeyName" key_name: String,
        "Restrictions" restrictions: ApiKeyRestrictions,
        "Description" description: String,
        "ExpireTime" expire_time: Timestamp,
        "NoExpiry" no_expiry: bool,
        "Tags" tags: StringMap,
    }
}

map_entries!(CreateKeyRequest: tags);

model! {
    #[derive(Eq, Hash)]
    pub struct CreateKeyResult {
        /// The key value to hand to clients.
        "Key" key: String,
        "KeyArn" key_arn: String,
        "KeyName" key_name: String,
        "CreateTime" create_time: Timestamp,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DescribeKeyRequest {
        @http {
            "KeyName" key_name: String,
        }
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DescribeKeyResult {
        "Key" key: String,
        "KeyArn" key_arn: String,
        "KeyName" key_name: String,
        "Restrictions" restrictions: ApiKeyRestrictions,
        "CreateTime" create_time: Timestamp,
        "ExpireTime" expire_time: Timestamp,
        "UpdateTime" update_time: Timestamp,
        "Description" description: String,
        "Tags" tags: StringMap,
    }
}

map_entries!(DescribeKeyResult: tags);

model! {
    #[derive(Eq, Hash)]
    pub struct UpdateKeyRequest {
        @http {
            "KeyName" key_name: String,
        }
        "Description" description: String,
        "ExpireTime" expire_time: Timestamp,
        "NoExpiry" no_expiry: bool,
        /// Required to change a key used within the last 7 days.
        "ForceUpdate" force_update: bool,
        "Restrictions" restrictions: ApiKeyRestrictions,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct UpdateKeyResult {
        "KeyArn" key_arn: String,
        "KeyName" key_name: String,
        "UpdateTime" update_time: Timestamp,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DeleteKeyRequest {
        @http {
            "KeyName" key_name: String,
            /// `forceDelete` query parameter; required for keys used in the last 7 days.
            "ForceDelete" force_delete: bool,
        }
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DeleteKeyResult {}
}

model! {
    #[derive(Eq, Hash)]
    pub struct ApiKeyFilter {
        "KeyStatus" key_status: Status,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListKeysRequest {
        "MaxResults" max_results: i32,
        "NextToken" next_token: String,
        "Filter" filter: ApiKeyFilter,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListKeysResult {
        "Entries" entries: Vec<ListKeysResponseEntry>,
        "NextToken" next_token: String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListKeysResponseEntry {
        "KeyName" key_name: String,
        "ExpireTime" expire_time: Timestamp,
        "Description" description: String,
        "Restrictions" restrictions: ApiKeyRestrictions,
        "CreateTime" create_time: Timestamp,
        "UpdateTime" update_time: Timestamp,
    }
}
