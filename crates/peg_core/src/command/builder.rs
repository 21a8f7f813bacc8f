//! Argument list assembly.
//!
//! Builds the ordered token list for one PersonaEditorCMD invocation from
//! the current form state. The order is part of the contract with the
//! external parser and must not change:
//!
//! 1. primary command token
//! 2. `/sub`
//! 3. `-save` (import commands only)
//! 4. `/ovrw`
//! 5. command-specific tokens
//!
//! `/ovrw` comes after `-save` on purpose; PersonaEditorCMD is sensitive
//! to the relative order of the two.

use super::types::{CommandForm, MainCommand};

/// Build the command-line tokens for the current form state.
///
/// Pure; the first token is always the primary command.
pub fn build_arguments(form: &CommandForm) -> Vec<String> {
    let mut args = Vec::new();

    // 1. Primary command
    if form.command == MainCommand::ExportByType {
        args.push(format!("{}{}", form.command.token(), form.export_type.code()));
    } else {
        args.push(form.command.token().to_string());
    }

    // 2-4. General modifiers
    if form.recursive {
        args.push("/sub".to_string());
    }

    if form.save_on_import && form.command.is_import() {
        args.push("-save".to_string());
    }

    if form.overwrite {
        args.push("/ovrw".to_string());
    }

    // 5. Command-specific arguments
    match form.command {
        MainCommand::ImportText => {
            if !form.map_pattern.is_empty() {
                args.push("/map".to_string());
                args.push(form.map_pattern.clone());
            }
            if form.line_by_line {
                args.push("/lbl".to_string());
            }
            if form.auto_hyphen {
                args.push("/auto".to_string());
                args.push(form.auto_width.to_string());
            }
            if form.skip_empty {
                args.push("/skipempty".to_string());
            }
            args.push("/enc".to_string());
            args.push(form.encoding.name().to_string());
        }
        MainCommand::ExportText => {
            if form.remove_split {
                args.push("/rmvspl".to_string());
            }
        }
        MainCommand::ExportPtp => {
            if form.copy_old_to_new {
                args.push("/co2n".to_string());
            }
        }
        MainCommand::ImportImage => {
            if form.set_size {
                args.push("/size".to_string());
                args.push(form.size_value.to_string());
            }
        }
        _ => {}
    }

    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::types::{ExportType, TextEncoding};

    fn form(command: MainCommand) -> CommandForm {
        CommandForm {
            command,
            ..CommandForm::default()
        }
    }

    #[test]
    fn primary_token_comes_first() {
        let mut f = form(MainCommand::ExportImage);
        f.recursive = true;
        f.overwrite = true;
        let args = build_arguments(&f);
        assert_eq!(args, ["-expimage", "/sub", "/ovrw"]);
    }

    #[test]
    fn export_by_type_concatenates_code() {
        let mut f = form(MainCommand::ExportByType);
        f.export_type = ExportType::Tmx;
        assert_eq!(build_arguments(&f)[0], "-expTMX");
    }

    #[test]
    fn save_comes_between_sub_and_ovrw() {
        let mut f = form(MainCommand::ImportPtp);
        f.recursive = true;
        f.save_on_import = true;
        f.overwrite = true;
        let args = build_arguments(&f);
        assert_eq!(args, ["-impptp", "/sub", "-save", "/ovrw"]);
    }

    #[test]
    fn save_is_dropped_for_export_commands() {
        let mut f = form(MainCommand::ExportText);
        f.save_on_import = true;
        let args = build_arguments(&f);
        assert!(!args.contains(&"-save".to_string()));
    }

    #[test]
    fn modifier_order_holds_for_all_combinations() {
        for command in MainCommand::ALL {
            for bits in 0..8u8 {
                let mut f = form(command);
                f.recursive = bits & 1 != 0;
                f.save_on_import = bits & 2 != 0;
                f.overwrite = bits & 4 != 0;
                let args = build_arguments(&f);

                assert!(args[0].starts_with(command.token()));
                let pos = |token: &str| args.iter().position(|a| a == token);
                let sub = pos("/sub");
                let save = pos("-save");
                let ovrw = pos("/ovrw");

                assert_eq!(sub.is_some(), f.recursive);
                assert_eq!(save.is_some(), f.save_on_import && command.is_import());
                assert_eq!(ovrw.is_some(), f.overwrite);
                if let (Some(s), Some(v)) = (sub, save) {
                    assert!(s < v);
                }
                if let (Some(v), Some(o)) = (save, ovrw) {
                    assert!(v < o);
                }
                if let (Some(s), Some(o)) = (sub, ovrw) {
                    assert!(s < o);
                }
            }
        }
    }

    #[test]
    fn import_text_options_in_fixed_order() {
        let mut f = form(MainCommand::ImportText);
        f.map_pattern = "*.msg".to_string();
        f.line_by_line = true;
        f.auto_hyphen = true;
        f.auto_width = 42;
        f.skip_empty = true;
        f.encoding = TextEncoding::Utf16;
        let args = build_arguments(&f);
        assert_eq!(
            args,
            [
                "-imptext", "/map", "*.msg", "/lbl", "/auto", "42", "/skipempty", "/enc", "UTF-16"
            ]
        );
    }

    #[test]
    fn import_text_always_emits_encoding() {
        let f = form(MainCommand::ImportText);
        let args = build_arguments(&f);
        assert_eq!(args, ["-imptext", "/enc", "UTF-8"]);
    }

    #[test]
    fn empty_map_pattern_is_skipped() {
        let mut f = form(MainCommand::ImportText);
        f.map_pattern = String::new();
        let args = build_arguments(&f);
        assert!(!args.contains(&"/map".to_string()));
    }

    #[test]
    fn export_text_remove_split() {
        let mut f = form(MainCommand::ExportText);
        f.remove_split = true;
        assert_eq!(build_arguments(&f), ["-exptext", "/rmvspl"]);
    }

    #[test]
    fn export_ptp_copy_flag() {
        let mut f = form(MainCommand::ExportPtp);
        f.copy_old_to_new = true;
        assert_eq!(build_arguments(&f), ["-expptp", "/co2n"]);
    }

    #[test]
    fn import_image_size() {
        let mut f = form(MainCommand::ImportImage);
        f.set_size = true;
        f.size_value = 13842;
        assert_eq!(build_arguments(&f), ["-impimage", "/size", "13842"]);
    }

    #[test]
    fn specific_options_only_apply_to_their_command() {
        // remove_split belongs to -exptext; it must not leak elsewhere.
        let mut f = form(MainCommand::ExportImage);
        f.remove_split = true;
        f.copy_old_to_new = true;
        f.set_size = true;
        assert_eq!(build_arguments(&f), ["-expimage"]);
    }
}
