use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use serde_json::{Map, Value as Json};
use tg_reflect::info::Type;
use tg_reflect::{Tagged, Value};

use crate::{ErrorKind, Field, Parent, Tag, TagError, Tagger};

type JsonTagger = Tagger<Json, Map<String, Json>>;

#[derive(Clone, Default, Debug, PartialEq, Tagged)]
struct Profile {
    #[tag(my_json = "email")]
    email: Option<String>,
}

#[derive(Clone, Default, Debug, PartialEq, Tagged)]
struct User {
    #[tag(my_json = "user_id")]
    id: u64,
    #[tag(my_json = "username")]
    username: Option<String>,
    #[tag(my_json = "profile")]
    profile: Profile,
    #[tag(my_json = "profile2")]
    profile2: Option<Box<Profile>>,
}

fn json_tagger() -> JsonTagger {
    Tagger::new().add(
        Tag::new("my_json")
            .in_function(json_in)
            .out_function(json_out)
            .symbols(";", ","),
    )
}

/// The single key of a field.
fn key_of(field: &Field<'_>) -> Result<&'static str, TagError> {
    let mut values = field.tag().values();
    match (values.next(), values.next()) {
        (Some(key), None) => Ok(key),
        _ => Err(TagError::custom("too many values for tag")),
    }
}

/// Keys of the containing fields, outermost first.
fn parent_keys(parent: Option<&Parent<'_>>) -> Vec<&'static str> {
    let mut keys = Vec::new();
    let mut link = parent;
    while let Some(parent) = link {
        keys.push(parent.tag().values().next().unwrap_or(parent.field().name()));
        link = parent.parent();
    }
    keys.reverse();
    keys
}

fn from_json(ty: Type, json: &Json) -> Option<Value> {
    match ty {
        Type::Ptr(_) if json.is_null() => Some(Value::Ptr(ty, None)),
        Type::Ptr(inner) => {
            from_json(*inner, json).map(|value| Value::Ptr(ty, Some(Box::new(value))))
        }
        Type::Bool => json.as_bool().map(Value::Bool),
        Type::U64 => json.as_u64().map(Value::U64),
        Type::I64 => json.as_i64().map(Value::I64),
        Type::F64 => json.as_f64().map(Value::F64),
        Type::String => json.as_str().map(|s| Value::String(String::from(s))),
        _ => None,
    }
}

fn to_json(value: &Value) -> Json {
    match value {
        Value::Ptr(_, None) => Json::Null,
        Value::Ptr(_, Some(inner)) => to_json(inner),
        Value::Bool(v) => Json::Bool(*v),
        Value::String(v) => Json::String(v.clone()),
        other => other
            .as_u64()
            .map(Json::from)
            .or_else(|| other.as_i64().map(Json::from))
            .or_else(|| other.as_f64().map(Json::from))
            .unwrap_or(Json::Null),
    }
}

fn json_in(data: &Json, field: &mut Field<'_>) -> Result<(), TagError> {
    // Nested structures are filled field by field.
    if field.is_struct() {
        return Ok(());
    }

    let key = key_of(field)?;
    let mut scope = data;
    for parent in parent_keys(field.parent()) {
        scope = scope
            .get(parent)
            .ok_or_else(|| TagError::custom(format!("Can't find key in json: {parent}")))?;
    }

    let json = scope
        .get(key)
        .ok_or_else(|| TagError::custom(format!("Can't find key in json: {key}")))?;
    let value = from_json(field.ty(), json)
        .ok_or_else(|| TagError::custom(format!("Unexpected json for {key}: {json}")))?;

    field.set_value(value)
}

fn json_out(
    mut acc: Map<String, Json>,
    field: &mut Field<'_>,
) -> Result<Map<String, Json>, TagError> {
    if field.is_struct() {
        return Ok(acc);
    }

    let key = key_of(field)?;
    let mut object = &mut acc;
    for parent in parent_keys(field.parent()) {
        object = match object
            .entry(parent)
            .or_insert_with(|| Json::Object(Map::new()))
        {
            Json::Object(map) => map,
            _ => return Err(TagError::custom(format!("{parent} is not an object"))),
        };
    }
    object.insert(String::from(key), to_json(&field.get()));

    Ok(acc)
}

fn parse(text: &str) -> Json {
    serde_json::from_str(text).unwrap()
}

#[test]
fn encode() {
    let user = User {
        id: 1,
        username: Some(String::from("foo")),
        profile: Profile {
            email: Some(String::from("foo@gmail.com")),
        },
        profile2: None,
    };

    let map = json_tagger().process_out(Map::new(), &user, None, &[]).unwrap();
    assert_eq!(
        Json::Object(map),
        parse(r#"{"user_id":1,"username":"foo","profile":{"email":"foo@gmail.com"}}"#)
    );
}

#[test]
fn decode_nested_pointer() {
    let data = parse(
        r#"{"user_id":1,"username":"foo","profile":{"email":"foo@gmail.com"},"profile2":{"email":"11"}}"#,
    );

    let mut user = User::default();
    json_tagger().process_in(&data, &mut user, None, &[]).unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(user.username.as_deref(), Some("foo"));
    assert_eq!(user.profile.email.as_deref(), Some("foo@gmail.com"));
    assert_eq!(
        user.profile2.and_then(|profile| profile.email).as_deref(),
        Some("11")
    );
}

#[test]
fn round_trip() {
    let user = User {
        id: 42,
        username: None,
        profile: Profile {
            email: Some(String::from("a@b.c")),
        },
        profile2: Some(Box::new(Profile { email: None })),
    };

    let tagger = json_tagger();
    let map = tagger.process_out(Map::new(), &user, None, &[]).unwrap();

    let mut decoded = User::default();
    tagger.process_in(&Json::Object(map), &mut decoded, None, &[]).unwrap();
    assert_eq!(decoded, user);
}

#[test]
fn missing_key_stops_decoding() {
    let data = parse(r#"{"user_id":7,"profile":{"email":"x"}}"#);

    let mut user = User::default();
    let err = json_tagger().process_in(&data, &mut user, None, &[]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Handler);
    assert_eq!(format!("{err}"), "Can't find key in json: username");
    assert_eq!(user.id, 7);
    assert_eq!(user.profile, Profile::default());
}

#[test]
fn decode_through_dyn() {
    let data = parse(r#"{"email":"dyn@b.c"}"#);
    let mut profile = Profile::default();
    let target: &mut dyn Tagged = &mut profile;

    json_tagger().process_in_dyn(&data, target, None, &[]).unwrap();
    assert_eq!(profile.email.as_deref(), Some("dyn@b.c"));
}
