use super::api;
use contracts::shared::upload::UploadFlow;
use contracts::usecases::u503_excel_upload::session::UPLOAD_DONE_MESSAGE;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u503_excel_upload::{ExcelUpload, GenericUploadSession};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::PageHeader;
use crate::shared::excel::read_excel_from_file;
use crate::shared::file_input::file_from_input;
use crate::shared::icons::icon;

#[component]
pub fn ExcelUploadPage() -> impl IntoView {
    let session = RwSignal::new(GenericUploadSession::new());
    let file = StoredValue::new_local(None::<web_sys::File>);

    let pick = move |ev: leptos::ev::Event| {
        let Some(picked) = file_from_input(&ev) else {
            return;
        };
        let name = picked.name();
        let size = picked.size() as u64;
        if !matches!(session.try_update(|s| s.select_file(&name, size)), Some(Ok(()))) {
            log::warn!("u503: rejected '{}'", name);
            return;
        }
        file.set_value(Some(picked.clone()));
        spawn_local(async move {
            match read_excel_from_file(picked).await {
                Ok(rows) => {
                    if let Some(Err(e)) = session.try_update(|s| s.load_sheet(rows)) {
                        log::warn!("u503: '{}': {}", name, e);
                    }
                }
                Err(e) => {
                    log::error!("u503: failed to read '{}': {}", name, e);
                    session.update(|s| s.read_failed());
                }
            }
        });
    };

    let upload = move |_| {
        let Some(picked) = file.get_value() else {
            return;
        };
        if session.try_update(|s| s.begin_upload()).flatten().is_none() {
            return;
        }
        spawn_local(async move {
            let result = api::upload(&picked).await;
            if let Err(e) = &result {
                log::error!("u503: upload failed: {}", e);
            }
            session.update(|s| s.finish_upload(result));
        });
    };

    view! {
        <div class="page">
            <PageHeader title=ExcelUpload::display_name() subtitle=ExcelUpload::description().to_string()>
                <label class="button button--secondary" for="u503-file-input">
                    {icon("file")}
                    " 파일 선택"
                </label>
                <input
                    id="u503-file-input"
                    type="file"
                    class="hidden"
                    accept=UploadFlow::Generic.accept_attr()
                    on:change=pick
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=upload
                    disabled=Signal::derive(move || !session.with(|s| s.can_upload()))
                >
                    {icon("upload")}
                    {move || if session.with(|s| s.loading) { " 업로드 중..." } else { " 업로드" }}
                </Button>
            </PageHeader>

            {move || session.with(|s| s.file.clone()).map(|f| view! {
                <div class="upload-zone__file">
                    <strong>{f.name.clone()}</strong>
                    {format!(" ({})", f.size_label())}
                </div>
            })}
            {move || session.with(|s| s.error.clone()).map(|e| view! { <div class="error">{e}</div> })}
            <Show when=move || session.with(|s| s.success)>
                <div class="alert alert--success">{UPLOAD_DONE_MESSAGE}</div>
            </Show>

            <Show when=move || session.with(|s| !s.rows.is_empty())>
                <div class="table-container">
                    <table class="table__data">
                        <thead class="table__head">
                            <tr>
                                {move || session.with(|s| s.headers.clone()).into_iter().map(|h| view! {
                                    <th class="table__header-cell">{h}</th>
                                }).collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {move || session.with(|s| s.rows.clone()).into_iter().enumerate().map(|(row, cells)| view! {
                                <tr class="table__row">
                                    {cells.into_iter().enumerate().map(|(col, value)| view! {
                                        <td class="table__cell">
                                            <input
                                                class="form__input"
                                                type="text"
                                                value=value
                                                on:change=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    session.update(|s| s.update_cell(row, col, &value));
                                                }
                                            />
                                        </td>
                                    }).collect_view()}
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
