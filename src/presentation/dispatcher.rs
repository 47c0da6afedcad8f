// Command dispatcher - Runs one action and prints a line per result
use crate::application::reconciler::Reconciler;
use crate::application::template_service::{Outcome, TemplateService};
use crate::error::SyncError;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateMissing,
    Create { host: String },
    Update { id: String, host: String },
}

impl Action {
    /// Parse the positional arguments. Unknown actions yield `InvalidAction`.
    pub fn parse(args: &[String]) -> Result<Self, SyncError> {
        let name = args.first().map(String::as_str).unwrap_or_default();
        let arg = |index: usize, action: &'static str, argument: &'static str| {
            args.get(index)
                .cloned()
                .ok_or(SyncError::MissingArgument { action, argument })
        };

        match name {
            "create-missing" => Ok(Action::CreateMissing),
            "create" => Ok(Action::Create {
                host: arg(1, "create", "HOST")?,
            }),
            "update" => Ok(Action::Update {
                id: arg(1, "update", "ID")?,
                host: arg(2, "update", "HOST")?,
            }),
            other => Err(SyncError::InvalidAction(other.to_string())),
        }
    }
}

pub struct Dispatcher {
    reconciler: Reconciler,
    templates: TemplateService,
    template_id: String,
}

impl Dispatcher {
    pub fn new(reconciler: Reconciler, templates: TemplateService, template_id: String) -> Self {
        Self {
            reconciler,
            templates,
            template_id,
        }
    }

    /// Run the action named by `args`, writing one report line per outcome.
    /// An unknown action is reported on `out` and is not an error.
    pub async fn execute<W: Write>(&self, args: &[String], out: &mut W) -> Result<Vec<Outcome>, SyncError> {
        let action = match Action::parse(args) {
            Ok(action) => action,
            Err(err @ SyncError::InvalidAction(_)) => {
                writeln!(out, "{}", err)?;
                return Ok(Vec::new());
            }
            Err(err) => return Err(err),
        };

        tracing::debug!("Dispatching {:?} with template {}", action, self.template_id);

        let outcomes = match action {
            Action::CreateMissing => {
                self.reconciler
                    .create_missing_dashboards(&self.template_id)
                    .await?
            }
            Action::Create { host } => {
                vec![self.templates.create_for_host(&self.template_id, &host).await?]
            }
            Action::Update { id, host } => {
                vec![self.templates.update_for_host(&self.template_id, &id, &host).await?]
            }
        };

        for outcome in &outcomes {
            writeln!(out, "{}", outcome)?;
        }

        Ok(outcomes)
    }
}
