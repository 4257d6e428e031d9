use scrappit_core::ConfirmPrompt;
use std::io::{self, Write};
use std::path::Path;

/// Blocking stdin confirmation for scrap root creation.
pub struct StdinPrompt;

impl ConfirmPrompt for StdinPrompt {
    fn confirm_create_scrap_root(&self, root: &Path) -> bool {
        prompt_confirm(
            &format!("Create new directory for scraps? Make: {}", root.display()),
            Some(false),
        )
        .unwrap_or(false)
    }
}

fn prompt_confirm(prompt: &str, default: Option<bool>) -> io::Result<bool> {
    let mut input = String::new();

    loop {
        input.clear();

        match default {
            Some(true) => print!("{} (Y/n): ", prompt),
            Some(false) | None => print!("{} (y/N): ", prompt),
        }
        io::stdout().flush()?;

        io::stdin().read_line(&mut input)?;

        match input.trim().to_uppercase().as_str() {
            "Y" => return Ok(true),
            "N" => return Ok(false),
            "" => match default {
                Some(default) => return Ok(default),
                None => continue,
            },
            _ => continue,
        }
    }
}
