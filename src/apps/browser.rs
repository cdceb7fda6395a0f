use indoc::indoc;

pub const ADDRESS: &str = "about:home";

/// Static start page shown in the Firefox window.
pub const PAGE: &str = indoc! {"
    Firefox

    This window is a placeholder: pages from the file
    browser open in your real browser instead.

    Try the dock, or type `help` in the terminal.
"};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_starts_with_title() {
        assert_eq!(PAGE.lines().next(), Some("Firefox"));
        assert!(PAGE.lines().any(|l| l.contains("help")));
    }
}
