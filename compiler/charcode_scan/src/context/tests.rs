use super::*;
use pretty_assertions::assert_eq;

// === Stack discipline ===

#[test]
fn nested_push_pop() {
    let mut stack = ContextStack::new();
    assert!(stack.is_empty());

    stack.push(ScanContext::new("str"));
    assert!(stack.has("str"));
    assert!(stack.is_context("str"));

    stack.push(ScanContext::new("num"));
    assert!(stack.has("str"), "ancestor lookup");
    assert!(!stack.is_context("str"));
    assert!(stack.is_context("num"));

    assert_eq!(stack.pop().name(), "num");
    assert_eq!(stack.pop().name(), "str");
    assert!(stack.is_empty());
}

#[test]
fn empty_stack_queries() {
    let stack = ContextStack::new();
    assert!(stack.peek().is_none());
    assert!(!stack.is_context("str"));
    assert!(!stack.has("str"));
    assert!(!stack.is_not_empty());
    assert_eq!(stack.len(), 0);
}

#[test]
fn try_pop_on_empty_returns_none() {
    let mut stack = ContextStack::new();
    assert!(stack.try_pop().is_none());
}

#[test]
#[should_panic(expected = "pop on an empty context stack")]
fn pop_on_empty_panics() {
    let mut stack = ContextStack::new();
    stack.pop();
}

#[test]
fn duplicate_names_are_allowed() {
    let mut stack = ContextStack::new();
    stack.push(ScanContext::new("tmpl"));
    stack.push(ScanContext::new("expr"));
    stack.push(ScanContext::new("tmpl"));
    assert_eq!(stack.len(), 3);
    assert!(stack.is_context("tmpl"));
    stack.pop();
    assert!(stack.is_context("expr"));
    assert!(stack.has("tmpl"));
}

#[test]
fn iter_runs_innermost_first() {
    let mut stack = ContextStack::new();
    for name in ["a", "b", "c"] {
        stack.push(ScanContext::new(name));
    }
    let names: Vec<&str> = stack.iter().map(ScanContext::name).collect();
    assert_eq!(names, vec!["c", "b", "a"]);
}

// === Per-context data ===

#[test]
fn put_and_get() {
    let mut ctx = ScanContext::new("str");
    assert_eq!(ctx.put("quote", '"'), None);
    ctx.put("start", ContextValue::Offset(4));
    ctx.put("raw", false);
    ctx.put("depth", 2i64);
    ctx.put("label", "tag");

    assert_eq!(ctx.get("quote").and_then(ContextValue::as_char), Some('"'));
    assert_eq!(ctx.get("start").and_then(ContextValue::as_offset), Some(4));
    assert_eq!(ctx.get("raw").and_then(ContextValue::as_bool), Some(false));
    assert_eq!(ctx.get("depth").and_then(ContextValue::as_int), Some(2));
    assert_eq!(ctx.get("label").and_then(ContextValue::as_text), Some("tag"));
    assert!(ctx.get("missing").is_none());
}

#[test]
fn put_replaces_and_returns_previous() {
    let mut ctx = ScanContext::new("tmpl");
    ctx.put("depth", 1i64);
    assert_eq!(ctx.put("depth", 2i64), Some(ContextValue::Int(1)));
    assert_eq!(ctx.remove("depth"), Some(ContextValue::Int(2)));
    assert!(!ctx.contains_key("depth"));
}

#[test]
fn typed_accessors_reject_other_variants() {
    let v = ContextValue::from("x");
    assert_eq!(v.as_char(), None);
    assert_eq!(v.as_int(), None);
    assert_eq!(v.as_text(), Some("x"));
}

#[test]
fn ancestor_data_is_mutable_while_buried() {
    let mut stack = ContextStack::new();
    stack.push(ScanContext::new("tmpl"));
    stack.push(ScanContext::new("expr"));

    if let Some(tmpl) = stack.find_mut("tmpl") {
        tmpl.put("braces", 1i64);
    }
    if let Some(Some(ContextValue::Int(n))) = stack.find_mut("tmpl").map(|c| c.get_mut("braces")) {
        *n += 1;
    }

    assert!(stack.is_context("expr"));
    stack.pop();
    let tmpl = stack.pop();
    assert_eq!(tmpl.get("braces"), Some(&ContextValue::Int(2)));
}

#[test]
fn find_returns_innermost_match() {
    let mut stack = ContextStack::new();
    let mut outer = ScanContext::new("tmpl");
    outer.put("level", 0i64);
    let mut inner = ScanContext::new("tmpl");
    inner.put("level", 1i64);
    stack.push(outer);
    stack.push(ScanContext::new("expr"));
    stack.push(inner);

    let found = stack.find("tmpl").and_then(|c| c.get("level"));
    assert_eq!(found, Some(&ContextValue::Int(1)));
}

#[test]
fn peek_mut_edits_top() {
    let mut stack = ContextStack::new();
    stack.push(ScanContext::new("str"));
    if let Some(top) = stack.peek_mut() {
        top.put("escaped", true);
    }
    assert_eq!(
        stack.peek().and_then(|c| c.get("escaped")),
        Some(&ContextValue::Bool(true))
    );
}
