//! Main window view.
//!
//! Single-window form: executable path, font settings, batch file list,
//! command configuration, log output, run button. Which option groups are
//! shown depends only on the selected command, so visibility always agrees
//! with what the argument builder will emit.

use iced::alignment::Vertical;
use iced::widget::{
    button, checkbox, column, container, pick_list, row, scrollable, text, text_input, Space,
};
use iced::{Element, Font, Length};

use peg_core::command::{ExportType, MainCommand, TextEncoding};

use crate::app::{App, Message};
use crate::theme::{colors, font, spacing, tone_color};

/// Build the main window view.
pub fn view(app: &App) -> Element<'_, Message> {
    let content = column![
        exe_path_row(app),
        font_group(app),
        file_group(app),
        command_group(app),
        output_group(app),
        execute_row(app),
    ]
    .spacing(spacing::MD)
    .padding(spacing::LG);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Executable path input with browse button.
fn exe_path_row(app: &App) -> Element<'_, Message> {
    row![
        text("Caminho do PersonaEditorCMD.exe:").size(font::NORMAL),
        text_input("Selecione o local do executável...", &app.exe_path)
            .on_input(Message::ExePathChanged)
            .on_submit(Message::ExePathSubmitted)
            .size(font::NORMAL)
            .width(Length::Fill),
        button(text("Procurar...").size(font::SM))
            .on_press(Message::BrowseExe)
            .padding([spacing::XS, spacing::SM]),
    ]
    .spacing(spacing::SM)
    .align_y(Vertical::Center)
    .into()
}

/// Font settings group (PersonaEditor.xml editor).
fn font_group(app: &App) -> Element<'_, Message> {
    let old_row = row![
        text("Fonte Original (OldFont):")
            .size(font::NORMAL)
            .width(Length::Fixed(180.0)),
        pick_list(
            &app.font_names[..],
            app.old_font.clone(),
            Message::OldFontSelected
        )
        .text_size(font::NORMAL)
        .width(Length::Fill),
    ]
    .spacing(spacing::SM)
    .align_y(Vertical::Center);

    let new_row = row![
        text("Nova Fonte (NewFont):")
            .size(font::NORMAL)
            .width(Length::Fixed(180.0)),
        pick_list(
            &app.font_names[..],
            app.new_font.clone(),
            Message::NewFontSelected
        )
        .text_size(font::NORMAL)
        .width(Length::Fill),
    ]
    .spacing(spacing::SM)
    .align_y(Vertical::Center);

    let save_button = button(text("Salvar Alterações no XML").size(font::NORMAL))
        .on_press_maybe(app.fonts_enabled.then_some(Message::SaveFontsPressed))
        .padding([spacing::SM, spacing::LG]);

    let status = text(&app.font_status)
        .size(font::SM)
        .color(tone_color(app.font_tone));

    group(
        "Configurações de Fonte (PersonaEditor.xml)",
        column![
            row![
                column![old_row, new_row].spacing(spacing::XS).width(Length::FillPortion(2)),
                column![save_button, status]
                    .spacing(spacing::SM)
                    .width(Length::FillPortion(1)),
            ]
            .spacing(spacing::LG),
        ]
        .into(),
    )
}

/// Batch input file list with add/clear actions.
fn file_group(app: &App) -> Element<'_, Message> {
    let list: Element<'_, Message> = if app.files.is_empty() {
        text("Nenhum arquivo selecionado.")
            .size(font::SM)
            .color(colors::TEXT_MUTED)
            .into()
    } else {
        column(
            app.files
                .iter()
                .map(|f| text(f.display().to_string()).size(font::SM).into()),
        )
        .spacing(2)
        .into()
    };

    let list_view = scrollable(container(list).padding(spacing::SM).width(Length::Fill))
        .height(Length::Fixed(140.0));

    let buttons = row![
        button(text("Selecionar Arquivos...").size(font::SM))
            .on_press(Message::AddFilesPressed)
            .padding([spacing::XS, spacing::SM]),
        button(text("Selecionar Pasta...").size(font::SM))
            .on_press(Message::AddFolderPressed)
            .padding([spacing::XS, spacing::SM]),
        button(text("Limpar Seleção").size(font::SM))
            .on_press(Message::ClearFilesPressed)
            .padding([spacing::XS, spacing::SM]),
        Space::new().width(Length::Fill),
        text(format!("{} arquivo(s)", app.files.len()))
            .size(font::SM)
            .color(colors::TEXT_MUTED),
    ]
    .spacing(spacing::SM)
    .align_y(Vertical::Center);

    group(
        "Arquivos de Entrada (Processamento em Lote)",
        column![list_view, buttons].spacing(spacing::SM).into(),
    )
}

/// Command selection plus the option groups of the active command.
fn command_group(app: &App) -> Element<'_, Message> {
    let mut cmd_row = row![
        text("Comando Principal:").size(font::NORMAL),
        pick_list(
            &MainCommand::ALL[..],
            Some(app.form.command),
            Message::CommandSelected
        )
        .text_size(font::NORMAL)
        .width(Length::Fill),
    ]
    .spacing(spacing::SM)
    .align_y(Vertical::Center);

    if app.form.command == MainCommand::ExportByType {
        cmd_row = cmd_row.push(
            pick_list(
                &ExportType::ALL[..],
                Some(app.form.export_type),
                Message::ExportTypeSelected,
            )
            .text_size(font::NORMAL),
        );
    }

    let mut col1 = column![general_args_group(app)].spacing(spacing::SM);
    if app.form.command == MainCommand::ImportText {
        col1 = col1.push(imptext_args_group(app));
    }
    if app.form.command == MainCommand::ExportText {
        col1 = col1.push(exptext_args_group(app));
    }

    let mut col2 = column![].spacing(spacing::SM);
    if app.form.command == MainCommand::ExportPtp {
        col2 = col2.push(expptp_args_group(app));
    }
    if app.form.command == MainCommand::ImportImage {
        col2 = col2.push(impimage_args_group(app));
    }

    let args_row = row![
        col1.width(Length::FillPortion(1)),
        col2.width(Length::FillPortion(1)),
    ]
    .spacing(spacing::MD);

    group(
        "Configuração do Comando",
        column![cmd_row, args_row].spacing(spacing::MD).into(),
    )
}

/// The modifiers every command understands.
fn general_args_group(app: &App) -> Element<'_, Message> {
    let mut items = column![
        checkbox(app.form.recursive)
            .label("/sub (Processar recursivamente)")
            .on_toggle(Message::RecursiveToggled)
            .text_size(font::NORMAL),
        checkbox(app.form.overwrite)
            .label("/ovrw (Sobrescrever arquivo original)")
            .on_toggle(Message::OverwriteToggled)
            .text_size(font::NORMAL),
    ]
    .spacing(spacing::XS);

    // -save only applies (and only shows) for import commands.
    if app.form.command.is_import() {
        items = items.push(
            checkbox(app.form.save_on_import)
                .label("-save (Salvar alterações na importação)")
            .on_toggle(Message::SaveOnImportToggled)
            .text_size(font::NORMAL),
        );
    }

    group("Argumentos Gerais", items.into())
}

/// Options of `-imptext`.
fn imptext_args_group(app: &App) -> Element<'_, Message> {
    let mut items = column![checkbox(app.form.single_import)
        .label("Usar um único arquivo de texto para importação")
    .on_toggle(Message::SingleImportToggled)
    .text_size(font::NORMAL)]
    .spacing(spacing::XS);

    if app.form.single_import {
        items = items.push(
            row![
                text_input(
                    "Caminho para o arquivo .txt/.tsv...",
                    &app.form.single_import_path
                )
                .on_input(Message::SingleImportPathChanged)
                .size(font::NORMAL)
                .width(Length::Fill),
                button(text("Procurar...").size(font::SM))
                    .on_press(Message::BrowseSingleImport)
                    .padding([spacing::XS, spacing::SM]),
            ]
            .spacing(spacing::SM)
            .align_y(Vertical::Center),
        );
    }

    items = items
        .push(
            row![
                text("/map:").size(font::NORMAL),
                text_input("", &app.form.map_pattern)
                    .on_input(Message::MapPatternChanged)
                    .size(font::NORMAL)
                    .width(Length::Fill),
            ]
            .spacing(spacing::SM)
            .align_y(Vertical::Center),
        )
        .push(
            checkbox(app.form.line_by_line)
                .label("/lbl (Importar linha por linha)")
                .on_toggle(Message::LineByLineToggled)
                .text_size(font::NORMAL),
        )
        .push(
            row![
                checkbox(app.form.auto_hyphen)
                    .label("/auto (Hifenização automática)")
                    .on_toggle(Message::AutoHyphenToggled)
                    .text_size(font::NORMAL),
                numeric_input(&app.auto_width_text, app.form.auto_hyphen, Message::AutoWidthChanged),
            ]
            .spacing(spacing::SM)
            .align_y(Vertical::Center),
        )
        .push(
            checkbox(app.form.skip_empty)
                .label("/skipempty (Pular textos vazios)")
                .on_toggle(Message::SkipEmptyToggled)
                .text_size(font::NORMAL),
        )
        .push(
            row![
                text("/enc:").size(font::NORMAL),
                pick_list(
                    &TextEncoding::ALL[..],
                    Some(app.form.encoding),
                    Message::EncodingSelected
                )
                .text_size(font::NORMAL),
            ]
            .spacing(spacing::SM)
            .align_y(Vertical::Center),
        );

    group("Argumentos de Importação de Texto (-imptext)", items.into())
}

/// Options of `-exptext`.
fn exptext_args_group(app: &App) -> Element<'_, Message> {
    let mut items = column![
        checkbox(app.form.remove_split)
            .label("/rmvspl (Substituir \"\\n\" por espaço)")
        .on_toggle(Message::RemoveSplitToggled)
        .text_size(font::NORMAL),
        checkbox(app.form.unify)
            .label("Unificar textos exportados em um único arquivo")
        .on_toggle(Message::UnifyToggled)
        .text_size(font::NORMAL),
    ]
    .spacing(spacing::XS);

    if app.form.unify {
        items = items.push(
            row![
                text_input("Caminho para o arquivo unificado...", &app.form.unify_path)
                    .on_input(Message::UnifyPathChanged)
                    .size(font::NORMAL)
                    .width(Length::Fill),
                button(text("Salvar Como...").size(font::SM))
                    .on_press(Message::BrowseUnifyTarget)
                    .padding([spacing::XS, spacing::SM]),
            ]
            .spacing(spacing::SM)
            .align_y(Vertical::Center),
        );
    }

    group("Argumentos de Exportação de Texto (-exptext)", items.into())
}

/// Options of `-expptp`.
fn expptp_args_group(app: &App) -> Element<'_, Message> {
    group(
        "Argumentos de Exportação de PTP (-expptp)",
        checkbox(app.form.copy_old_to_new)
            .label("/co2n (Copiar texto original para o novo)")
        .on_toggle(Message::CopyOldToNewToggled)
        .text_size(font::NORMAL)
        .into(),
    )
}

/// Options of `-impimage`.
fn impimage_args_group(app: &App) -> Element<'_, Message> {
    group(
        "Argumentos de Importação de Imagem (-impimage)",
        row![
            checkbox(app.form.set_size)
                .label("/size (Definir novo tamanho da fonte)")
            .on_toggle(Message::SetSizeToggled)
            .text_size(font::NORMAL),
            numeric_input(&app.size_value_text, app.form.set_size, Message::SizeValueChanged),
        ]
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .into(),
    )
}

/// Scrolling command output.
fn output_group(app: &App) -> Element<'_, Message> {
    let log = text(&app.log_text).size(font::SM).font(Font::MONOSPACE);

    let mut view = scrollable(container(log).padding(spacing::SM).width(Length::Fill))
        .height(Length::Fixed(220.0));
    if app.config.settings().logging.autoscroll {
        view = view.anchor_bottom();
    }

    group("Saída do Comando", view.into())
}

/// The run button, disabled while a batch is in flight.
fn execute_row(app: &App) -> Element<'_, Message> {
    let label = if app.is_running {
        "Executando..."
    } else {
        "🚀 Executar Comando"
    };

    container(
        button(text(label).size(font::MD))
            .on_press_maybe((!app.is_running).then_some(Message::ExecutePressed))
            .padding([spacing::SM, spacing::XL]),
    )
    .center_x(Length::Fill)
    .into()
}

/// A titled, bordered section.
fn group<'a>(title: &'a str, content: Element<'a, Message>) -> Element<'a, Message> {
    container(
        column![text(title).size(font::LG), content].spacing(spacing::SM),
    )
    .style(container::bordered_box)
    .padding(spacing::MD)
    .width(Length::Fill)
    .into()
}

/// Small numeric field, editable only while its checkbox is on.
fn numeric_input<'a>(
    value: &'a str,
    enabled: bool,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    let mut input = text_input("", value)
        .size(font::NORMAL)
        .width(Length::Fixed(90.0));
    if enabled {
        input = input.on_input(on_input);
    }
    input.into()
}
