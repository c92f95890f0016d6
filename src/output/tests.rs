//! Unit tests for the output module

#[cfg(test)]
#[allow(clippy::similar_names, clippy::module_inception)]
mod tests {
    use std::cell::Cell;

    use crate::output::{OutputContext, Styles, progress};
    use owo_colors::OwoColorize;

    // --- Styles tests ---

    #[test]
    fn test_styles_default_has_no_colors() {
        let styles = Styles::default();
        let text = "test";
        let styled = text.style(styles.success);
        assert_eq!(format!("{styled}"), text);
    }

    #[test]
    fn test_styles_colorize_applies_colors() {
        let mut styles = Styles::default();
        styles.colorize();
        let styled = format!("{}", "test".style(styles.success));
        assert!(styled.contains("\x1b["), "should contain ANSI escape code");
        assert!(styled.contains("32"), "should contain green color code");
    }

    #[test]
    fn test_styles_colorize_sets_distinct_styles() {
        let mut styles = Styles::default();
        styles.colorize();
        let text = "x";
        let success = format!("{}", text.style(styles.success));
        let header = format!("{}", text.style(styles.header));
        assert_ne!(success, header);
    }

    // --- OutputContext construction tests ---

    #[test]
    fn test_output_context_no_color_flag_disables_colors() {
        let ctx = OutputContext::new(true, false);
        let styled = format!("{}", "test".style(ctx.styles.success));
        assert!(
            !styled.contains("\x1b["),
            "should not contain ANSI codes when no_color=true"
        );
    }

    #[test]
    fn test_output_context_quiet_flag_sets_quiet() {
        let ctx = OutputContext::new(false, true);
        assert!(ctx.quiet);
    }

    #[test]
    fn test_output_context_not_quiet_by_default() {
        let ctx = OutputContext::new(false, false);
        assert!(!ctx.quiet);
    }

    #[test]
    fn test_output_context_show_progress_false_when_quiet() {
        let ctx = OutputContext::new(false, true);
        assert!(!ctx.show_progress());
    }

    #[test]
    fn test_output_context_show_progress_false_when_not_tty() {
        let ctx = OutputContext::new(false, false);
        if !ctx.is_tty {
            assert!(!ctx.show_progress());
        }
    }

    // --- Helper method smoke tests (no_color=true avoids ANSI in test output) ---

    #[test]
    fn test_section_does_not_panic_when_not_quiet() {
        let ctx = OutputContext::new(true, false);
        ctx.section("main/Peripherals:");
    }

    #[test]
    fn test_section_does_not_panic_when_quiet() {
        let ctx = OutputContext::new(true, true);
        ctx.section("main/Peripherals:");
    }

    #[test]
    fn test_line_does_not_panic_when_not_quiet() {
        let ctx = OutputContext::new(true, false);
        ctx.line("[Logger/Print]: Logging stuff");
    }

    #[test]
    fn test_line_does_not_panic_when_quiet() {
        let ctx = OutputContext::new(true, true);
        ctx.line("[Logger/Print]: Logging stuff");
    }

    // --- blocking_step tests ---

    #[test]
    fn test_blocking_step_runs_wait_once_when_quiet() {
        let ctx = OutputContext::new(true, true);
        let calls = Cell::new(0u32);
        ctx.blocking_step("Simulate latency...", "Done!", || {
            calls.set(calls.get() + 1);
        });
        assert_eq!(calls.get(), 1, "wait must run even when output is suppressed");
    }

    #[test]
    fn test_blocking_step_runs_wait_once_when_not_quiet() {
        let ctx = OutputContext::new(true, false);
        let calls = Cell::new(0u32);
        ctx.blocking_step("Simulate latency...", "Done!", || {
            calls.set(calls.get() + 1);
        });
        assert_eq!(calls.get(), 1);
    }

    // --- Progress helpers tests ---

    #[test]
    fn test_spinner_creates_progress_bar() {
        let pb = progress::spinner("Loading...");
        pb.finish();
    }

    #[test]
    fn test_no_color_env_disables_colors() {
        let ctx = OutputContext::new(true, false);
        let styled = format!("{}", "test".style(ctx.styles.success));
        assert!(!styled.contains("\x1b["), "NO_COLOR should disable colors");
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

mod proptests {
    use std::cell::Cell;

    use crate::output::{OutputContext, Styles};
    use owo_colors::OwoColorize;
    use proptest::prelude::*;

    proptest! {
        /// OutputContext with no_color=true never produces ANSI codes
        #[test]
        fn prop_no_color_never_produces_ansi(text in "[a-zA-Z0-9 ]{1,50}") {
            let ctx = OutputContext::new(true, false);
            let styled = format!("{}", text.style(ctx.styles.success));
            prop_assert!(!styled.contains("\x1b["), "no_color should disable ANSI codes");
        }

        /// show_progress is false when quiet is true
        #[test]
        fn prop_quiet_disables_progress(no_color in proptest::bool::ANY) {
            let ctx = OutputContext::new(no_color, true);
            prop_assert!(!ctx.show_progress(), "quiet should disable progress");
        }

        /// Section and line helpers do not panic with any printable message
        #[test]
        fn prop_helper_methods_do_not_panic(msg in "[a-zA-Z0-9 .,!?:_/\\[\\]-]{0,100}") {
            let ctx = OutputContext::new(true, false);
            ctx.section(&msg);
            ctx.line(&msg);
        }

        /// blocking_step runs its wait exactly once for any fragment and tail
        #[test]
        fn prop_blocking_step_runs_wait_once(
            fragment in "[a-zA-Z0-9 .:\\[\\]/]{0,40}",
            tail in "[a-zA-Z0-9!]{0,10}",
            quiet in proptest::bool::ANY,
        ) {
            let ctx = OutputContext::new(true, quiet);
            let calls = Cell::new(0u32);
            ctx.blocking_step(&fragment, &tail, || {
                calls.set(calls.get() + 1);
            });
            prop_assert_eq!(calls.get(), 1);
        }

        /// quiet flag is stored exactly as passed
        #[test]
        fn prop_quiet_flag_stored_correctly(quiet in proptest::bool::ANY) {
            let ctx = OutputContext::new(true, quiet);
            prop_assert_eq!(ctx.quiet, quiet);
        }

        /// no_color=true always produces plain text (no ANSI) for all styles
        #[test]
        fn prop_no_color_plain_for_all_styles(text in "[a-zA-Z0-9]{1,30}") {
            let mut styles = Styles::default();
            // no_color=true means colorize() is never called — styles stay default
            for styled in [
                format!("{}", text.style(styles.success)),
                format!("{}", text.style(styles.header)),
            ] {
                prop_assert!(!styled.contains("\x1b["), "no_color should produce plain text");
            }
            // Verify colorize() does add ANSI
            styles.colorize();
            let colored = format!("{}", text.style(styles.success));
            prop_assert!(colored.contains("\x1b["), "colorize should add ANSI codes");
        }
    }
}
