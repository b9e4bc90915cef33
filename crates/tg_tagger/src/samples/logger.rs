use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use tg_reflect::{Tagged, Value};

use crate::{Field, Tag, TagError, Tagger};

#[derive(Clone, Default, Tagged)]
struct RequestData {
    status_code: u16,
    content_type: String,
}

#[derive(Clone, Default, Tagged)]
struct MyDataForLogging {
    #[tag(my_logger = "key:summary | to:string")]
    parsed_body: Vec<u8>,
    #[tag(my_logger = "key:data")]
    request_data: Option<RequestData>,
    #[tag(my_logger = "-")]
    ignore_field: String,
}

#[derive(Default, Debug, PartialEq)]
struct LoggerMessage {
    summary: String,
    data: BTreeMap<&'static str, Value>,
}

fn logger_tagger() -> Tagger<(), LoggerMessage> {
    Tagger::new().add(
        Tag::new("my_logger")
            .out_function(logger_out)
            .symbols(":", " | "),
    )
}

fn logger_out(
    mut message: LoggerMessage,
    field: &mut Field<'_>,
) -> Result<LoggerMessage, TagError> {
    if field.is_struct() {
        return Ok(message);
    }

    let value = if field.is_pointer() {
        field.get_from_pointer()
    } else {
        Some(field.get())
    };
    let Some(value) = value else {
        return Ok(message);
    };

    if field.tag().is_empty() {
        if let Some(parent) = field.parent()
            && parent.tag().find_by_key("key") == Some("data")
        {
            message.data.insert(field.name(), value);
        }
        return Ok(message);
    }

    let tag = field.tag();
    if tag.find_by_key("key") == Some("summary") && tag.find_by_key("to") == Some("string") {
        let bytes = value
            .as_bytes()
            .ok_or_else(|| TagError::custom(format!("{} is not bytes", field.name())))?;
        message.summary = String::from_utf8_lossy(bytes).into_owned();
    }

    Ok(message)
}

fn request() -> MyDataForLogging {
    MyDataForLogging {
        parsed_body: b"hello world!".to_vec(),
        request_data: Some(RequestData {
            status_code: 200,
            content_type: String::from("application/json"),
        }),
        ignore_field: String::from("..."),
    }
}

#[test]
fn extracts_summary_and_data() {
    let message = logger_tagger()
        .process_out(LoggerMessage::default(), &request(), Some("my_logger"), &[])
        .unwrap();

    assert_eq!(message.summary, "hello world!");
    assert_eq!(message.data.len(), 2);
    assert_eq!(message.data["status_code"], Value::U16(200));
    assert_eq!(message.data["content_type"].as_str(), Some("application/json"));
}

#[test]
fn without_empty_field_tag_nested_fields_are_skipped() {
    let message = logger_tagger()
        .process_out(LoggerMessage::default(), &request(), None, &[])
        .unwrap();

    assert_eq!(message.summary, "hello world!");
    assert!(message.data.is_empty());
}

#[test]
fn null_request_data() {
    let source = MyDataForLogging {
        request_data: None,
        ..request()
    };
    let message = logger_tagger()
        .process_out(LoggerMessage::default(), &source, Some("my_logger"), &["my_logger"])
        .unwrap();

    assert!(message.data.is_empty());
}

#[test]
fn each_handler_sees_its_own_grammar() {
    #[derive(Clone, Default, Tagged)]
    struct Both {
        #[tag(my_logger = "key:body | to:string", my_json = "body;omitempty")]
        body: String,
    }

    let tagger = Tagger::<(), Vec<String>>::new()
        .add(
            Tag::new("my_logger")
                .symbols(":", " | ")
                .out_function(|mut acc: Vec<String>, field| {
                    let parsed = field.tag().parsed();
                    acc.push(format!("my_logger {parsed:?}"));
                    assert_eq!(parsed.len(), 2);
                    Ok(acc)
                }),
        )
        .add(
            Tag::new("my_json")
                .symbols(":", ";")
                .out_function(|mut acc: Vec<String>, field| {
                    assert_eq!(field.tag().values().collect::<Vec<_>>(), ["body", "omitempty"]);
                    assert!(field.tag().exists("omitempty"));
                    assert!(!field.tag().exists("key"));
                    acc.push(String::from("my_json"));
                    Ok(acc)
                }),
        );

    let acc = tagger.process_out(Vec::new(), &Both::default(), None, &[]).unwrap();
    assert_eq!(acc.len(), 2);
    assert!(acc[0].starts_with("my_logger"));
    assert_eq!(acc[1], "my_json");
}
