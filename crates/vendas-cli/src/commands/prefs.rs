use vendas_core::{KeyValueStore, Layout, PreferenceStore, Theme, UiSettings};

use crate::cli::PrefsCommands;
use crate::error::CliError;

pub fn run_prefs<S: KeyValueStore>(
    command: PrefsCommands,
    store: &PreferenceStore<S>,
) -> Result<(), CliError> {
    match command {
        PrefsCommands::Show { json } => {
            let settings = store.load::<UiSettings>();
            if json {
                println!("{}", serde_json::to_string_pretty(&settings)?);
            } else {
                println!("{}", format_settings(&settings));
            }
        }
        PrefsCommands::Set { theme, layout } => {
            let settings = update_settings(store, theme, layout)?;
            println!("{}", format_settings(&settings));
        }
        PrefsCommands::Reset => {
            store.reset::<UiSettings>()?;
            println!("{}", format_settings(&store.load::<UiSettings>()));
        }
    }
    Ok(())
}

/// Apply the given fields on top of the current settings and save the whole record
pub fn update_settings<S: KeyValueStore>(
    store: &PreferenceStore<S>,
    theme: Option<Theme>,
    layout: Option<Layout>,
) -> Result<UiSettings, CliError> {
    if theme.is_none() && layout.is_none() {
        return Err(CliError::NothingToUpdate);
    }

    let mut settings = store.load::<UiSettings>();
    if let Some(theme) = theme {
        settings.theme = theme;
    }
    if let Some(layout) = layout {
        settings.layout = layout;
    }

    store.save(&settings)?;
    tracing::info!(theme = %settings.theme, layout = %settings.layout, "Updated UI settings");
    Ok(settings)
}

pub fn format_settings(settings: &UiSettings) -> String {
    format!("theme={} layout={}", settings.theme, settings.layout)
}
