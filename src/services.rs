// src/services.rs

//! Best-effort restart of the services attached to a checkout.

use tracing::{debug, info};

use crate::exec::{run_step, CommandRunner};

pub struct ServiceRestarter<'a> {
    runner: &'a dyn CommandRunner,
    restart_command: &'a str,
}

impl<'a> ServiceRestarter<'a> {
    /// `restart_command` is the prefix the service name is appended to,
    /// e.g. `sudo systemctl restart`.
    pub fn new(runner: &'a dyn CommandRunner, restart_command: &'a str) -> Self {
        Self {
            runner,
            restart_command,
        }
    }

    pub fn command_for(&self, service: &str) -> String {
        format!("{} {}", self.restart_command, service)
    }

    /// Restart every service in list order.
    ///
    /// A failed restart is logged by `run_step` and does not stop the
    /// remaining ones.
    pub async fn restart_all(&self, services: &[String]) {
        for service in services {
            info!("restarting service: {service}");
            if let Err(err) = run_step(self.runner, &self.command_for(service), None).await {
                debug!(service = %service, error = %err, "restart failed; continuing");
            }
        }
    }
}
