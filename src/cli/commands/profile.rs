use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::config_path;
use crate::errors::AppResult;
use crate::models::profile::ProfilePatch;
use crate::ui::messages::{info, success};
use crate::ui::render::print_profile;

/// Show the profile, or merge the given fields into it and save.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Profile {
        name,
        email,
        phone,
        role,
    } = &cli.command
    {
        let patch = ProfilePatch {
            name: name.clone(),
            email: email.clone(),
            phone: phone.clone(),
            role: role.clone(),
        };

        if patch.is_empty() {
            print_profile(&cfg.profile);
            return Ok(());
        }

        // reload from disk so command-line overrides are not persisted
        let path = config_path(cli);
        let mut stored = Config::load_from(&path)?;
        stored.profile.apply(patch);

        if cli.test {
            info("Test mode: profile not saved.");
        } else {
            stored.save_to(&path)?;
            success("Profile updated.");
        }
        print_profile(&stored.profile);
    }
    Ok(())
}
