//! Resource tags, shared by every resource type.

use super::StringMap;

model! {
    #[derive(Eq, Hash)]
    pub struct ListTagsForResourceRequest {
        @http {
            "ResourceArn" resource_arn: String,
        }
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListTagsForResourceResult {
        "Tags" tags: StringMap,
    }
}

map_entries!(ListTagsForResourceResult: tags);

model! {
    /// Adds or overwrites up to 50 tags on a resource.
    #[derive(Eq, Hash)]
    pub struct TagResourceRequest {
        @http {
            "ResourceArn" resource_arn: String,
        }
        "Tags" tags: StringMap,
    }
}

map_entries!(TagResourceRequest: tags);

model! {
    #[derive(Eq, Hash)]
    pub struct TagResourceResult {}
}

model! {
    #[derive(Eq, Hash)]
    pub struct UntagResourceRequest {
        @http {
            "ResourceArn" resource_arn: String,
            /// `tagKeys` query parameter, repeated once per key.
            "TagKeys" tag_keys: Vec<String>,
        }
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct UntagResourceResult {}
}
