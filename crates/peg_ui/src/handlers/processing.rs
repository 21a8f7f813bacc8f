//! Batch processing handlers.
//!
//! The batch is a message cycle: `ExecutePressed` validates and seeds the
//! state, then `ProcessNextFile`/`FileFinished` alternate until the list
//! is exhausted or an invocation fault aborts it, and `BatchFinished`
//! runs the optional unification and re-enables the run button. One file
//! runs at a time, so log output lands between invocations.

use std::path::{Path, PathBuf};

use iced::Task;

use peg_core::command::MainCommand;
use peg_core::logging::RunLogger;
use peg_core::runner::{self, BatchOutcome, RunOutput};
use peg_core::unify;

use crate::app::{App, BatchState, Message};

impl App {
    /// Validate preconditions and start the batch.
    pub fn handle_execute_pressed(&mut self) -> Task<Message> {
        if self.is_running {
            return Task::none();
        }

        if let Err(e) = runner::validate(&self.exe_path, &self.files, &self.form) {
            self.append_log(&format!("ERRO: {}", e));
            return Task::none();
        }

        self.log_text.clear();
        self.is_running = true;

        let logger = match RunLogger::new(
            self.config.logs_folder(),
            self.config.settings().logging.show_timestamps,
        ) {
            Ok(logger) => Some(logger),
            Err(e) => {
                tracing::warn!("Failed to create run log file: {}", e);
                None
            }
        };

        self.batch = Some(BatchState {
            files: self.files.clone(),
            index: 0,
            failures: 0,
            aborted: false,
            processed: Vec::new(),
            logger,
        });

        self.append_log("--- INICIANDO PROCESSO ---");
        Task::done(Message::ProcessNextFile)
    }

    /// Launch the next file's invocation, or finish the batch.
    pub fn handle_process_next_file(&mut self) -> Task<Message> {
        let file = {
            let Some(batch) = &self.batch else {
                return Task::none();
            };
            if batch.index >= batch.files.len() {
                return Task::done(Message::BatchFinished);
            }
            batch.files[batch.index].clone()
        };

        if let Some(batch) = &mut self.batch {
            batch.processed.push(file.clone());
        }

        let invocation =
            runner::plan_invocation(Path::new(&self.exe_path), &file, &self.form);
        let file_name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.append_log(&format!("\n> Processando: {}", file_name));
        self.append_log(&format!(
            "  Diretório de Trabalho: {}",
            invocation.workdir.display()
        ));
        self.append_log(&format!("  Comando: {}", invocation.command_line()));
        if self.config.settings().logging.show_command_json {
            self.append_log(&format!("  argv: {}", invocation.args_json()));
        }

        // The child wait is blocking; keep it off the executor threads.
        Task::perform(
            async move {
                match tokio::task::spawn_blocking(move || runner::invoke(&invocation)).await {
                    Ok(result) => result.map_err(|e| e.to_string()),
                    Err(e) => Err(format!("falha interna ao aguardar o processo: {}", e)),
                }
            },
            Message::FileFinished,
        )
    }

    /// Record one file's result; a spawn fault aborts the remaining batch.
    pub fn handle_file_finished(&mut self, result: Result<RunOutput, String>) -> Task<Message> {
        match result {
            Ok(output) => {
                let stdout = output.stdout.trim().to_string();
                if !stdout.is_empty() {
                    self.append_log(&format!("  Saída:\n{}", stdout));
                }
                let stderr = output.stderr.trim().to_string();
                if !stderr.is_empty() {
                    self.append_log(&format!("  ERROS:\n{}", stderr));
                }
                self.append_log(&output.status_line());

                if let Some(batch) = &mut self.batch {
                    if !output.success() {
                        batch.failures += 1;
                    }
                    batch.index += 1;
                }
                Task::done(Message::ProcessNextFile)
            }
            Err(message) => {
                self.append_log(&format!(
                    "ERRO CRÍTICO ao executar o processo: {}",
                    message
                ));
                if let Some(batch) = &mut self.batch {
                    batch.aborted = true;
                }
                Task::done(Message::BatchFinished)
            }
        }
    }

    /// Unify if requested, close the run log, and go back to idle.
    pub fn handle_batch_finished(&mut self) -> Task<Message> {
        if self.form.command == MainCommand::ExportText && self.form.unify {
            self.unify_exported_files();
        }

        self.append_log("\n--- PROCESSO CONCLUÍDO ---");

        if let Some(mut batch) = self.batch.take() {
            let outcome = BatchOutcome::classify(batch.failures, batch.aborted);
            tracing::info!(
                "Batch finished: {:?} ({} files offered, {} failures)",
                outcome,
                batch.processed.len(),
                batch.failures
            );
            if let Some(logger) = &mut batch.logger {
                logger.close();
            }
        }

        self.is_running = false;
        Task::none()
    }

    /// Merge the predicted `.txt` siblings of every file offered to the
    /// batch, in batch order, into the chosen target.
    fn unify_exported_files(&mut self) {
        self.append_log("\n--- INICIANDO UNIFICAÇÃO DE ARQUIVOS DE TEXTO ---");

        let processed = self
            .batch
            .as_ref()
            .map(|b| b.processed.clone())
            .unwrap_or_default();
        let target = PathBuf::from(&self.form.unify_path);

        let mut lines = Vec::new();
        let result = unify::unify_exports(&processed, &target, &mut |line| {
            lines.push(line.to_string());
        });
        for line in &lines {
            self.append_log(line);
        }

        match result {
            Ok(count) => {
                let target_name = target
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                self.append_log(&format!(
                    "\nUnificação concluída. {} arquivos foram juntados em '{}'.",
                    count, target_name
                ));
            }
            Err(e) => {
                self.append_log(&format!("\nERRO CRÍTICO durante a unificação: {}", e));
            }
        }
    }
}
