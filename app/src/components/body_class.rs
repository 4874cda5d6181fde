use leptos::document;

/// Scoped acquisition of a class on `<body>`: the class is added on
/// construction and removed on `Drop`, so release runs on every exit path.
///
/// Browser-only. SSR must never construct one (create it inside an effect).
pub struct BodyClass(&'static str);

impl BodyClass {
    pub fn acquire(class: &'static str) -> Self {
        if let Some(body) = document().body() {
            let _ = body.class_list().add_1(class);
        }
        Self(class)
    }
}

impl Drop for BodyClass {
    fn drop(&mut self) {
        if let Some(body) = document().body() {
            let _ = body.class_list().remove_1(self.0);
        }
    }
}

// region:    --- Tests

#[cfg(test)]
mod tests {
    use super::BodyClass;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn acquire_then_release() {
        let body = leptos::document().body().unwrap();
        let class_list = body.class_list();

        let lock = BodyClass::acquire("test-overflow-lock");
        assert!(class_list.contains("test-overflow-lock"));

        drop(lock);
        assert!(!class_list.contains("test-overflow-lock"));
    }

    #[wasm_bindgen_test]
    fn release_runs_once_per_acquisition() {
        let body = leptos::document().body().unwrap();
        let class_list = body.class_list();

        {
            let _lock = BodyClass::acquire("test-scoped-lock");
            assert!(class_list.contains("test-scoped-lock"));
        }
        assert!(!class_list.contains("test-scoped-lock"));

        // a second cycle behaves the same, no residue from the first
        {
            let _lock = BodyClass::acquire("test-scoped-lock");
            assert!(class_list.contains("test-scoped-lock"));
        }
        assert!(!class_list.contains("test-scoped-lock"));
    }
}

// endregion: --- Tests
