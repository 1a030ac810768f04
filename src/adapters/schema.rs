//! Response schemas sent with each `generateContent` call, in the OpenAPI
//! subset Gemini accepts (`ARRAY`, `OBJECT`, `STRING`, `NUMBER`).

use serde_json::{json, Map, Value};

const VIDEO_FIELDS: [&str; 7] = [
    "id",
    "title",
    "channel",
    "duration",
    "thumbnail",
    "views",
    "published",
];

const ARTICLE_FIELDS: [(&str, &str); 10] = [
    ("title", "STRING"),
    ("content", "STRING"),
    ("seoScore", "NUMBER"),
    ("wordCount", "NUMBER"),
    ("readingTime", "NUMBER"),
    ("keywordDensity", "STRING"),
    ("headingCount", "NUMBER"),
    ("internalLinks", "NUMBER"),
    ("imageCount", "NUMBER"),
    ("metaTags", "STRING"),
];

fn object_schema<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();
    for (name, kind) in fields {
        properties.insert(name.to_string(), json!({ "type": kind }));
        required.push(Value::String(name.to_string()));
    }
    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": required,
    })
}

/// An array of video records, every field a required string.
pub fn video_list_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": object_schema(VIDEO_FIELDS.iter().map(|name| (*name, "STRING"))),
    })
}

pub fn article_schema() -> Value {
    object_schema(ARTICLE_FIELDS)
}
