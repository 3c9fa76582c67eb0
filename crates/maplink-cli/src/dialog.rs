use async_trait::async_trait;
use maplink_core::{ChoiceDialog, Dialog};

/// Renders the app choice as an interactive terminal menu.
///
/// The cancel text is the last menu entry; picking it or pressing Esc
/// cancels.
pub(crate) struct TerminalDialog;

#[async_trait]
impl ChoiceDialog for TerminalDialog {
    async fn present(&self, dialog: &Dialog) -> Option<usize> {
        let dialog = dialog.clone();
        let selection = tokio::task::spawn_blocking(move || {
            let mut items = dialog.options.clone();
            items.push(dialog.cancel_text.clone());
            dialoguer::Select::with_theme(&dialoguer::theme::ColorfulTheme::default())
                .with_prompt(format!("{}\n{}", dialog.title, dialog.message))
                .items(&items)
                .default(0)
                .interact_opt()
                .map(|choice| choice.filter(|index| *index < dialog.options.len()))
        })
        .await;

        match selection {
            Ok(Ok(choice)) => choice,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "choice prompt failed");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "choice prompt task panicked");
                None
            }
        }
    }
}
