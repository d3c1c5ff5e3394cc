//! Command registration with an explicit activate/deactivate lifecycle.

use crate::app_error::AppError;
use crate::unit_test_command::{GenerateUnitTests, COMMAND_ID};
use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

pub trait Command {
    fn execute<'s>(&'s self) -> Pin<Box<dyn Future<Output = Result<PathBuf, AppError>> + 's>>;
}

/// Proof that a command id is registered. Consumed by [`CommandRegistry::unregister`].
#[derive(Debug, PartialEq, Eq)]
pub struct Registration {
    id: String,
}

impl Registration {
    pub fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Default)]
pub struct CommandRegistry<'a> {
    commands: HashMap<String, Box<dyn Command + 'a>>,
}

impl<'a> CommandRegistry<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        id: &str,
        command: Box<dyn Command + 'a>,
    ) -> Result<Registration, AppError> {
        if self.commands.contains_key(id) {
            return Err(AppError::Config(format!(
                "Command '{id}' is already registered."
            )));
        }
        self.commands.insert(id.to_string(), command);
        Ok(Registration { id: id.to_string() })
    }

    pub fn unregister(&mut self, registration: Registration) -> bool {
        self.commands.remove(&registration.id).is_some()
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.commands.contains_key(id)
    }

    pub async fn execute(&self, id: &str) -> Result<PathBuf, AppError> {
        let command = self
            .commands
            .get(id)
            .ok_or_else(|| AppError::Config(format!("Unknown command: {id}")))?;
        command.execute().await
    }
}

/// Everything registered by [`activate`]; hand it back to [`ExtensionHandle::deactivate`].
pub struct ExtensionHandle {
    registrations: Vec<Registration>,
}

impl ExtensionHandle {
    pub fn deactivate(self, registry: &mut CommandRegistry<'_>) {
        for registration in self.registrations {
            registry.unregister(registration);
        }
    }
}

pub fn activate<'a>(
    registry: &mut CommandRegistry<'a>,
    command: GenerateUnitTests<'a>,
) -> Result<ExtensionHandle, AppError> {
    let registration = registry.register(COMMAND_ID, Box::new(command))?;
    tracing::debug!(command = registration.id(), "command registered");
    Ok(ExtensionHandle {
        registrations: vec![registration],
    })
}
