use std::path::PathBuf;

/// Replaces every `${HOME}` and `~` in `path` with the user's home directory.
///
/// Paths are returned untouched when no home directory can be determined.
pub fn expand_home(path: &str) -> PathBuf {
    match dirs::home_dir() {
        Some(home) => PathBuf::from(expand_with(path, &home.to_string_lossy())),
        None => PathBuf::from(path),
    }
}

fn expand_with(path: &str, home: &str) -> String {
    path.replace("${HOME}", home).replace('~', home)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_and_home_var() {
        assert_eq!(expand_with("~/pi.txt", "/home/ada"), "/home/ada/pi.txt");
        assert_eq!(expand_with("${HOME}/img/pi.png", "/home/ada"), "/home/ada/img/pi.png");
        assert_eq!(expand_with("./pi.png", "/home/ada"), "./pi.png");
    }

    #[test]
    fn test_expand_home_uses_home_dir() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~"), home);
        }
        assert_eq!(expand_home("relative/pi.txt"), PathBuf::from("relative/pi.txt"));
    }
}
