use super::api;
use chrono::Utc;
use contracts::shared::error::ApiError;
use contracts::shared::upload::UploadFlow;
use contracts::usecases::u501_hs_classification::session::{
    IN_PROGRESS_MESSAGE, MODIFIED_MARKER, NO_FILE_MESSAGE,
};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_hs_classification::{
    ClassificationColumn, ClassificationRow, ClassificationSession, HsClassification, HsCodeEdit,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::{AlertBox, PageHeader, SortableHeaderCell};
use crate::shared::excel::write_workbook;
use crate::shared::file_input::{file_from_drop, file_from_input};
use crate::shared::icons::icon;

#[component]
pub fn HsClassificationPage() -> impl IntoView {
    let session = RwSignal::new(ClassificationSession::new());
    // web_sys::File is !Send
    let file = StoredValue::new_local(None::<web_sys::File>);
    let (drag_over, set_drag_over) = signal(false);
    let dialog_open = RwSignal::new(false);

    let accept_file = move |picked: web_sys::File| {
        let name = picked.name();
        let size = picked.size() as u64;
        match session.try_update(|s| s.select_file(&name, size)) {
            Some(Ok(())) => {
                log::info!("u501: selected '{}'", name);
                file.set_value(Some(picked));
            }
            _ => log::warn!("u501: rejected '{}'", name),
        }
    };

    let classify = move |_| {
        let picked = file.get_value();
        let Some(Ok(selected)) = session.try_update(|s| s.begin_upload()) else {
            return;
        };
        let Some(picked) = picked else {
            session.update(|s| {
                s.apply_upload_response(Err(ApiError::validation(NO_FILE_MESSAGE)))
            });
            return;
        };
        spawn_local(async move {
            log::info!("u501: classifying '{}' ({})", selected.name, selected.size_label());
            let response = api::upload_file(&picked).await;
            session.update(|s| s.apply_upload_response(response));
        });
    };

    let download_template = move |_| {
        if !session.try_update(|s| s.begin_template_download()).unwrap_or(false) {
            return;
        }
        spawn_local(async move {
            let result = api::download_template().await;
            session.update(|s| s.finish_template_download(result));
        });
    };

    let export = move |_| {
        let Some(Ok(sheet)) = session.try_update(|s| s.export_sheet(Utc::now())) else {
            return;
        };
        let result = write_workbook(&sheet);
        if let Err(e) = &result {
            log::error!("u501: export failed: {}", e);
        }
        session.update(|s| s.finish_export(result));
    };

    let start_over = move |_| {
        session.update(|s| s.start_over());
        file.set_value(None);
    };

    // Keep the dialog in step with the edit state; closing it cancels the edit.
    Effect::new(move |_| {
        let open = session.with(|s| s.edit.is_open());
        if dialog_open.get_untracked() != open {
            dialog_open.set(open);
        }
    });
    Effect::new(move |_| {
        if !dialog_open.get() && session.with_untracked(|s| s.edit.is_open()) {
            session.update(|s| s.cancel_edit());
        }
    });

    let edit_value = move || {
        session.with(|s| match &s.edit {
            HsCodeEdit::Editing { value, .. } => value.clone(),
            HsCodeEdit::Idle => String::new(),
        })
    };
    let edit_original = move || {
        session.with(|s| match &s.edit {
            HsCodeEdit::Editing { original, .. } => original.clone(),
            HsCodeEdit::Idle => String::new(),
        })
    };

    let accept_attr = UploadFlow::Classification.accept_attr();

    view! {
        <div class="page">
            <PageHeader
                title=HsClassification::display_name()
                subtitle=HsClassification::description().to_string()
            >
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=download_template
                    disabled=Signal::derive(move || session.with(|s| s.downloading_template))
                >
                    {icon("download")}
                    {move || if session.with(|s| s.downloading_template) {
                        " 다운로드 중..."
                    } else {
                        " 양식 다운로드"
                    }}
                </Button>
            </PageHeader>

            <AlertBox alert=Signal::derive(move || session.with(|s| s.alert.clone())) />

            <Show when=move || session.with(|s| s.show_upload_area)>
                <div
                    class="upload-zone"
                    class:upload-zone--active=move || drag_over.get()
                    on:dragover=move |ev: leptos::ev::DragEvent| {
                        ev.prevent_default();
                        set_drag_over.set(true);
                    }
                    on:dragleave=move |_| set_drag_over.set(false)
                    on:drop=move |ev: leptos::ev::DragEvent| {
                        set_drag_over.set(false);
                        if let Some(picked) = file_from_drop(&ev) {
                            accept_file(picked);
                        }
                    }
                >
                    {icon("upload")}
                    <p>"엑셀 파일을 끌어다 놓거나"</p>
                    <label class="button button--secondary" for="u501-file-input">
                        {icon("file")}
                        " 파일 선택"
                    </label>
                    <input
                        id="u501-file-input"
                        type="file"
                        class="hidden"
                        accept=accept_attr.clone()
                        on:change=move |ev| {
                            if let Some(picked) = file_from_input(&ev) {
                                accept_file(picked);
                            }
                        }
                    />
                    {move || session.with(|s| s.selected_file.clone()).map(|f| view! {
                        <div class="upload-zone__file">
                            <strong>{f.name.clone()}</strong>
                            {format!(" ({})", f.size_label())}
                        </div>
                    })}
                </div>

                <div class="upload-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=classify
                        disabled=Signal::derive(move || {
                            session.with(|s| s.uploading || s.selected_file.is_none())
                        })
                    >
                        {move || if session.with(|s| s.uploading) {
                            IN_PROGRESS_MESSAGE
                        } else {
                            "HS코드 분류"
                        }}
                    </Button>
                </div>
            </Show>

            <Show when=move || session.with(|s| s.show_results)>
                <div class="results">
                    <div class="results__toolbar">
                        {move || session.with(|s| s.summary()).map(|(name, total, success, failed)| view! {
                            <div class="results__summary">
                                <span>"파일: " <strong>{name}</strong></span>
                                <span>{format!("전체 {}건", total)}</span>
                                <span class="text-success">{format!("성공 {}건", success)}</span>
                                <span class="text-error">{format!("실패 {}건", failed)}</span>
                                <span class="text-warning">
                                    {move || format!("분류 불가 {}건", session.with(|s| s.unknown_count()))}
                                </span>
                            </div>
                        })}
                        <div class="results__actions">
                            <Button appearance=ButtonAppearance::Primary on_click=export>
                                {icon("download")}
                                " 엑셀 다운로드"
                            </Button>
                            <Button appearance=ButtonAppearance::Secondary on_click=start_over>
                                {icon("refresh")}
                                " 다른 파일로 다시 시작"
                            </Button>
                        </div>
                    </div>

                    <p class="results__hint">"HS코드 셀을 더블클릭하면 수정할 수 있습니다."</p>

                    <div class="table-container">
                        <table class="table__data">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"수정"</th>
                                    {ClassificationColumn::all().into_iter().map(|col| view! {
                                        <SortableHeaderCell
                                            label=col.label()
                                            column=col
                                            sort=Signal::derive(move || session.with(|s| s.sort.clone()))
                                            on_sort=Callback::new(move |col| session.update(|s| s.sort_by(col)))
                                        />
                                    }).collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    session
                                        .with(|s| s.rows.clone())
                                        .into_iter()
                                        .enumerate()
                                        .map(|(idx, row)| result_row(session, idx, row))
                                        .collect_view()
                                }}
                            </tbody>
                        </table>
                    </div>
                </div>
            </Show>

            <Dialog open=dialog_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"HS코드 수정"</DialogTitle>
                        <DialogContent>
                            <div class="form__group">
                                <label class="form__label">"기존 값"</label>
                                <div class="form__static">{edit_original}</div>
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="u501-hs-code">"새 HS코드"</label>
                                <input
                                    id="u501-hs-code"
                                    class="form__input"
                                    type="text"
                                    prop:value=edit_value
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        session.update(|s| s.set_edit_value(value));
                                    }
                                />
                            </div>
                        </DialogContent>
                        <DialogActions>
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(move || !session.with(|s| s.can_confirm()))
                                on_click=move |_| {
                                    if let Some(Some(modified)) = session.try_update(|s| s.confirm_edit()) {
                                        log::debug!("u501: hs code edited, modified={}", modified);
                                    }
                                }
                            >
                                "확인"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| session.update(|s| s.cancel_edit())
                            >
                                "취소"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </div>
    }
}

fn result_row(
    session: RwSignal<ClassificationSession>,
    idx: usize,
    row: ClassificationRow,
) -> impl IntoView {
    let unknown = row.is_unknown();
    let modified = row.is_modified;

    view! {
        <tr
            class="table__row"
            class:table__row--unknown=unknown
            class:table__row--modified=modified
        >
            <td class="table__cell">{modified.then_some(MODIFIED_MARKER)}</td>
            {ClassificationColumn::all().into_iter().map(|col| {
                let text = row.value(col).to_string();
                if col == ClassificationColumn::HsCode {
                    view! {
                        <td
                            class="table__cell table__cell--editable"
                            title="더블클릭하여 수정"
                            on:dblclick=move |_| session.update(|s| s.begin_edit(idx))
                        >
                            {text}
                        </td>
                    }.into_any()
                } else {
                    view! { <td class="table__cell">{text}</td> }.into_any()
                }
            }).collect_view()}
        </tr>
    }
}
