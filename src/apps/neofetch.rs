use std::time::Duration;

use indoc::formatdoc;

/// The system summary printed by `neofetch` and shown in its window.
pub fn art(uptime: Duration) -> Vec<String> {
    let uptime = uptime.as_secs();
    formatdoc! {r"
              /\
             /  \       arch@desktop
            /\   \      ------------
           /      \     OS: Arch Linux (HTML)
          /   ,,   \    Kernel: 6.x (pretend)
         /   |  |  -\   Uptime: {uptime}s
        /_-''    ''-_\  Packages: 1337 (pretend)
                       Shell: JS
                       Theme: Arch-Cyan
    "}
    .lines()
    .filter(|line| !line.trim().is_empty())
    .map(str::to_string)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn art_carries_uptime_and_identity() {
        let lines = art(Duration::from_millis(7_900));
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "      /\\");
        assert!(lines[1].ends_with("arch@desktop"));
        assert!(lines[5].ends_with("Uptime: 7s"));
        assert!(lines[8].ends_with("Theme: Arch-Cyan"));
    }
}
