use mjreport_core::*;
use mjreport_testing::assertions::{assert_no_section, assert_numbered_section};
use mjreport_testing::fixtures::{record, task_with_response};
use serde_json::json;

#[test]
fn test_imagine_sub_images_are_numbered_in_order() {
    let r = record(json!({"success": true, "sub_image_urls": ["u1", "u2"]}));
    let out = format_imagine_result(&r);

    assert_numbered_section(&out, "Sub Images:", &["u1", "u2"]).unwrap();
    assert_no_section(&out, "Available Actions:").unwrap();
}

#[test]
fn test_imagine_minimal_success_is_all_placeholders() {
    let out = format_imagine_result(&record(json!({"success": true})));
    assert_eq!(
        out,
        "Task ID: N/A\nImage ID: N/A\n\n\
         Image URL: N/A\nImage Size: N/AxN/A\n\n\
         Raw Image URL: N/A\nRaw Image Size: N/AxN/A\n\n\
         Progress: N/A%\n"
    );
}

#[test]
fn test_imagine_actions_are_comma_joined() {
    let r = record(json!({"success": true, "actions": ["upscale1", "reroll"]}));
    let out = format_imagine_result(&r);
    assert!(out.ends_with("Available Actions:\n  upscale1, reroll\n"));
}

#[test]
fn test_edit_never_lists_actions() {
    let r = record(json!({"success": true, "actions": ["upscale1"], "sub_image_urls": ["e1"]}));
    let out = format_edit_result(&r);

    assert_numbered_section(&out, "Sub Images:", &["e1"]).unwrap();
    assert_no_section(&out, "Available Actions:").unwrap();
    assert!(out.ends_with("Sub Images:\n  1. e1\n"));
}

#[test]
fn test_describe_empty_descriptions() {
    assert_eq!(
        format_describe_result(&record(json!({"descriptions": []}))),
        "No descriptions returned."
    );
    assert_eq!(
        format_describe_result(&record(json!({}))),
        "No descriptions returned."
    );
}

#[test]
fn test_describe_keeps_full_text() {
    let long = "b".repeat(250);
    let out = format_describe_result(&record(json!({"descriptions": [long.clone()]})));
    assert_eq!(
        out,
        format!("Image Descriptions:\n\n--- Option 1 ---\n{}\n", long)
    );
}

#[test]
fn test_video_without_urls_has_no_section() {
    let r = record(json!({"success": true, "video_id": "v-1", "video_urls": []}));
    let out = format_video_result(&r);

    assert_no_section(&out, "Video URLs:").unwrap();
    assert!(out.ends_with("Progress: N/A%\n"));
}

#[test]
fn test_translate_missing_or_empty_content() {
    assert_eq!(
        format_translate_result(&record(json!({}))),
        "No translation returned."
    );
    assert_eq!(
        format_translate_result(&record(json!({"content": ""}))),
        "No translation returned."
    );
}

#[test]
fn test_translate_content_is_verbatim() {
    let content = "line one\n  line two\n";
    let out = format_translate_result(&record(json!({"content": content})));
    assert_eq!(out, format!("Translated Content:\n\n{}", content));
}

#[test]
fn test_task_descriptions_truncate_to_100_chars() {
    let r = task_with_response(json!({"success": true, "descriptions": ["a".repeat(150)]}));
    let out = format_task_result(&r);

    let expected = format!("  1. {}...", "a".repeat(100));
    assert!(out.lines().any(|l| l == expected), "{}", out);
}

#[test]
fn test_task_short_descriptions_still_get_suffix() {
    let r = task_with_response(json!({"success": true, "descriptions": ["tiny", "fox"]}));
    let out = format_task_result(&r);
    assert!(out.ends_with("Descriptions:\n  1. tiny...\n  2. fox...\n"));
}

#[test]
fn test_task_image_branch_takes_priority_over_descriptions() {
    let r = task_with_response(json!({
        "success": true,
        "image_url": "https://cdn/x.png",
        "descriptions": ["ignored"]
    }));
    let out = format_task_result(&r);

    assert!(out.contains("Image URL: https://cdn/x.png\nImage Size: N/AxN/A\n"));
    assert_no_section(&out, "Descriptions:").unwrap();
    assert!(!out.contains("Available Actions"));
}

#[test]
fn test_task_success_without_details_ends_after_banner() {
    let r = task_with_response(json!({"success": true}));
    assert!(format_task_result(&r).ends_with("  Mode: fast\n\nResponse: Success\n"));
}

#[test]
fn test_task_unsuccessful_response_is_dumped() {
    let r = task_with_response(json!({"success": false, "foo": "bar"}));
    let out = format_task_result(&r);
    assert_eq!(
        out.lines().last(),
        Some(r#"Response: {"foo":"bar","success":false}"#)
    );
}

#[test]
fn test_task_missing_sections_default() {
    let out = format_task_result(&record(json!({})));
    assert_eq!(
        out,
        "Task ID: N/A\nType: N/A\nCreated At: N/A\nFinished At: N/A\n\n\
         Request:\n  Action: N/A\n  Prompt: N/A\n  Mode: N/A\n\n\
         Response: {}"
    );
}

#[test]
fn test_formatters_are_idempotent() {
    let r = task_with_response(json!({"success": true, "descriptions": ["x"]}));
    for category in Category::ALL {
        assert_eq!(format(category, &r), format(category, &r));
    }
}
