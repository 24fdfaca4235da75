//! Domain-specific assertion macros for carlot harnesses.
//!
//! These wrap the plain asserts with failure messages that say which slot of
//! a matched triple was wrong, instead of a bare `Option` mismatch.

// ---------------------------------------------------------------------------
// Triple assertions
// ---------------------------------------------------------------------------

/// Assert that a `MatchedTriple` carries a body with the given type.
///
/// ```rust
/// assert_matched_body!(triples[0], "Sedan");
/// ```
#[macro_export]
macro_rules! assert_matched_body {
    ($triple:expr, $body_type:expr) => {{
        let triple: &carlot_core::MatchedTriple = &$triple;
        let expected: &str = $body_type;
        match &triple.body {
            Some(body) if body.body_type.as_deref() == Some(expected) => {}
            Some(body) => panic!(
                "assert_matched_body! failed for model {:?}:\n  expected body type {:?}\n  actual:   {:?}",
                triple.model.id, expected, body.body_type
            ),
            None => panic!(
                "assert_matched_body! failed: model {:?} matched no body (expected {:?})",
                triple.model.id, expected
            ),
        }
    }};
}

/// Assert that a `MatchedTriple` carries an engine with the given type.
#[macro_export]
macro_rules! assert_matched_engine {
    ($triple:expr, $engine_type:expr) => {{
        let triple: &carlot_core::MatchedTriple = &$triple;
        let expected: &str = $engine_type;
        match &triple.engine {
            Some(engine) if engine.engine_type.as_deref() == Some(expected) => {}
            Some(engine) => panic!(
                "assert_matched_engine! failed for model {:?}:\n  expected engine type {:?}\n  actual:   {:?}",
                triple.model.id, expected, engine.engine_type
            ),
            None => panic!(
                "assert_matched_engine! failed: model {:?} matched no engine (expected {:?})",
                triple.model.id, expected
            ),
        }
    }};
}

/// Assert that a `MatchedTriple` has an empty body slot.
#[macro_export]
macro_rules! assert_no_body {
    ($triple:expr) => {{
        let triple: &carlot_core::MatchedTriple = &$triple;
        if let Some(body) = &triple.body {
            panic!(
                "assert_no_body! failed: model {:?} unexpectedly matched body {:?}",
                triple.model.id, body
            );
        }
    }};
}

/// Assert that a `MatchedTriple` has an empty engine slot.
#[macro_export]
macro_rules! assert_no_engine {
    ($triple:expr) => {{
        let triple: &carlot_core::MatchedTriple = &$triple;
        if let Some(engine) = &triple.engine {
            panic!(
                "assert_no_engine! failed: model {:?} unexpectedly matched engine {:?}",
                triple.model.id, engine
            );
        }
    }};
}
