/// Open ended key value data attached to bookings, form responses and
/// rendered template output. Keys are strings and values can be any JSON
/// value, which keeps user authored content representable without a
/// catch-all dynamic type.
pub type Metadata = serde_json::Map<String, serde_json::Value>;
