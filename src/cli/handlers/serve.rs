//! Serve command handler
//!
//! Runs the HTTP server, or only reports on the configuration for `--dry-run`.

use crate::config::Settings;
use crate::error::AppResult;
use crate::server::Server;

/// Handler for the serve command
pub struct ServeCommandHandler {
    config: Settings,
}

impl ServeCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Start the server, or with `dry_run` validate and print a summary.
    pub async fn execute(self, dry_run: bool) -> AppResult<()> {
        if dry_run {
            let summary = self.dry_run_summary()?;
            println!("{}", summary);
            return Ok(());
        }
        Server::new(self.config).run().await?;
        Ok(())
    }

    /// Validate the configuration and describe what `serve` would do.
    ///
    /// The database URL is not printed since it may carry credentials.
    pub fn dry_run_summary(&self) -> AppResult<String> {
        self.config.validate()?;
        self.config.logger.to_logger_config()?;

        let database = &self.config.database;
        let logger = &self.config.logger;
        Ok(format!(
            "Configuration is valid\n\
             Server would bind to: {}\n\
             Database pool: {}..{} connections, {}s timeout\n\
             Logging: level={} console={} file={}\n\
             Dry run completed successfully",
            self.config.server.address(),
            database.min_connections,
            database.max_connections,
            database.connection_timeout,
            logger.level,
            logger.console.enabled,
            logger.file.enabled,
        ))
    }
}
