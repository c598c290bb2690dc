use vendas_core::{DisplayPreferences, KeyValueStore, PreferenceStore};

use crate::cli::DisplayCommands;
use crate::commands::common::on_off;
use crate::error::CliError;

pub fn run_display<S: KeyValueStore>(
    command: DisplayCommands,
    store: &PreferenceStore<S>,
) -> Result<(), CliError> {
    match command {
        DisplayCommands::Show { json } => {
            let prefs = store.load::<DisplayPreferences>();
            if json {
                println!("{}", serde_json::to_string_pretty(&prefs)?);
            } else {
                println!("{}", format_display(&prefs));
            }
        }
        DisplayCommands::Set {
            privacy_blur,
            sound,
        } => {
            let prefs = update_display(store, privacy_blur.map(Into::into), sound.map(Into::into))?;
            println!("{}", format_display(&prefs));
        }
        DisplayCommands::Reset => {
            store.reset::<DisplayPreferences>()?;
            println!("{}", format_display(&store.load::<DisplayPreferences>()));
        }
    }
    Ok(())
}

pub fn update_display<S: KeyValueStore>(
    store: &PreferenceStore<S>,
    privacy_blur: Option<bool>,
    sound_enabled: Option<bool>,
) -> Result<DisplayPreferences, CliError> {
    if privacy_blur.is_none() && sound_enabled.is_none() {
        return Err(CliError::NothingToUpdate);
    }

    let mut prefs = store.load::<DisplayPreferences>();
    if let Some(privacy_blur) = privacy_blur {
        prefs.privacy_blur = privacy_blur;
    }
    if let Some(sound_enabled) = sound_enabled {
        prefs.sound_enabled = sound_enabled;
    }

    store.save(&prefs)?;
    tracing::info!(
        privacy_blur = prefs.privacy_blur,
        sound_enabled = prefs.sound_enabled,
        "Updated display preferences"
    );
    Ok(prefs)
}

pub fn format_display(prefs: &DisplayPreferences) -> String {
    format!(
        "privacy-blur={} sound={}",
        on_off(prefs.privacy_blur),
        on_off(prefs.sound_enabled)
    )
}
