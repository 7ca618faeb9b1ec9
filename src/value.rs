use indexmap::IndexMap;

/// A JSON value as seen by the sprig filter engine.
///
/// This type represents every valid JSON shape. Numbers are stored as
/// `f64`, matching what the JSON decoder produces, and objects remember
/// the order their keys were inserted in.
///
/// # Key Order
///
/// `Object` is backed by [`IndexMap`], so a document's key order survives
/// decoding, filtering, and re-serialization unchanged.
///
/// # Examples
///
/// ```
/// use sprig::Value;
/// use indexmap::IndexMap;
///
/// // Scalar values
/// let null = Value::Null;
/// let boolean = Value::Boolean(true);
/// let number = Value::Number(42.0);
/// let string = Value::String("hello".to_string());
///
/// // Collections
/// let array = Value::Array(vec![Value::Number(1.0), Value::Number(2.0)]);
///
/// let mut obj = IndexMap::new();
/// obj.insert("key".to_string(), Value::String("value".to_string()));
/// let object = Value::Object(obj);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON null
    Null,

    /// JSON boolean (true/false)
    Boolean(bool),

    /// JSON number (always an `f64`, as decoded)
    Number(f64),

    /// UTF-8 string
    String(String),

    /// Array of values (homogeneous or heterogeneous)
    Array(Vec<Value>),

    /// Object with string keys, kept in insertion order
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Decode a JSON document into a [`Value`].
    ///
    /// This is the boundary between raw input and the engine: the text is
    /// parsed by `serde_json` and converted, keeping object key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprig::Value;
    ///
    /// let doc = Value::from_json(r#"{"name": "ada"}"#).unwrap();
    /// assert!(matches!(doc, Value::Object(_)));
    ///
    /// assert!(Value::from_json("{not json").is_err());
    /// ```
    pub fn from_json(input: &str) -> Result<Value, serde_json::Error> {
        let decoded: serde_json::Value = serde_json::from_str(input)?;
        Ok(Value::from(decoded))
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            // A number that cannot be represented as f64 decodes as null.
            serde_json::Value::Number(n) => n.as_f64().map(Value::Number).unwrap_or(Value::Null),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                let mut object = IndexMap::with_capacity(map.len());
                for (key, value) in map {
                    object.insert(key, Value::from(value));
                }
                Value::Object(object)
            }
        }
    }
}
