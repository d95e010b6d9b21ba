use super::api;
use contracts::shared::upload::UploadFlow;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_mapping_rules::{
    MappingField, MappingRule, MappingRuleSession, MappingRules,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::excel::{read_excel_from_file, write_workbook};
use crate::shared::file_input::file_from_input;
use crate::shared::icons::icon;
use crate::shared::components::PageHeader;

#[component]
pub fn MappingRulesPage() -> impl IntoView {
    let session = RwSignal::new(MappingRuleSession::new());

    let import = move |ev: leptos::ev::Event| {
        let Some(picked) = file_from_input(&ev) else {
            return;
        };
        let name = picked.name();
        if !matches!(session.try_update(|s| s.check_file(&name)), Some(Ok(()))) {
            log::warn!("u502: rejected '{}'", name);
            return;
        }
        spawn_local(async move {
            match read_excel_from_file(picked).await {
                Ok(rows) => match session.try_update(|s| s.import_sheet(&rows)) {
                    Some(Ok(count)) => log::info!("u502: imported {} rules from '{}'", count, name),
                    Some(Err(e)) => log::warn!("u502: '{}' rejected: {}", name, e),
                    None => {}
                },
                Err(e) => {
                    log::error!("u502: failed to read '{}': {}", name, e);
                    session.update(|s| s.file_read_failed());
                }
            }
        });
    };

    let download_template = move |_| {
        let result = write_workbook(&MappingRuleSession::template_sheet());
        if let Err(e) = &result {
            log::error!("u502: template download failed: {}", e);
        }
        session.update(|s| s.finish_write(result));
    };

    let export = move |_| {
        if !session.with(|s| s.can_export()) {
            return;
        }
        let result = write_workbook(&session.with(|s| s.export_sheet()));
        if let Err(e) = &result {
            log::error!("u502: export failed: {}", e);
        }
        session.update(|s| s.finish_write(result));
    };

    let map = move |_| {
        let Some(Ok(rules)) = session.try_update(|s| s.prepare_submission()) else {
            return;
        };
        spawn_local(async move {
            let response = api::map_rules(&rules).await;
            session.update(|s| s.apply_mapping_response(response));
        });
    };

    let accept_attr = UploadFlow::Mapping.accept_attr();

    view! {
        <div class="page">
            <PageHeader
                title=MappingRules::display_name()
                subtitle=MappingRules::description().to_string()
            >
                <Button appearance=ButtonAppearance::Secondary on_click=download_template>
                    {icon("download")}
                    " 템플릿 다운로드"
                </Button>
                <label class="button button--secondary" for="u502-file-input">
                    {icon("upload")}
                    " 엑셀 업로드"
                </label>
                <input
                    id="u502-file-input"
                    type="file"
                    class="hidden"
                    accept=accept_attr
                    on:change=import
                />
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=export
                    disabled=Signal::derive(move || !session.with(|s| s.can_export()))
                >
                    {icon("file")}
                    " 엑셀 내보내기"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=map
                    disabled=Signal::derive(move || !session.with(|s| s.can_map()))
                >
                    {move || if session.with(|s| s.is_mapping) { "매핑 중..." } else { "HS코드 매핑" }}
                </Button>
            </PageHeader>

            {move || session.with(|s| s.error.clone()).map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"#"</th>
                            {MappingField::all().into_iter().map(|field| view! {
                                <th class="table__header-cell">
                                    <div>{field.key()}</div>
                                    <div class="table__header-sub">{field.label()}</div>
                                </th>
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            session
                                .with(|s| s.display_rows())
                                .into_iter()
                                .enumerate()
                                .map(|(idx, rule)| rule_row(session, idx, rule))
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn rule_row(session: RwSignal<MappingRuleSession>, idx: usize, rule: MappingRule) -> impl IntoView {
    let on_edit = move |field: MappingField, value: String| {
        session.update(|s| {
            if let Err(e) = s.update_cell(idx, field, &value) {
                s.error = Some(e.to_string());
            }
        });
    };

    view! {
        <tr class="table__row">
            <td class="table__cell">{idx + 1}</td>
            {MappingField::all().into_iter().map(|field| {
                let current = rule.get(field).to_string();
                let cell = match (field, field.choices()) {
                    (MappingField::HsCode, _) => view! {
                        <span class="table__cell-value">{current}</span>
                    }.into_any(),
                    (_, Some(choices)) => view! {
                        <select
                            class="form__select"
                            on:change=move |ev| on_edit(field, event_target_value(&ev))
                        >
                            <option value="" selected={current.is_empty()}>"선택"</option>
                            {choices.into_iter().map(|choice| view! {
                                <option value=choice selected={current == choice}>{choice}</option>
                            }).collect_view()}
                        </select>
                    }.into_any(),
                    (_, None) => view! {
                        <input
                            class="form__input"
                            type="text"
                            value=current
                            on:change=move |ev| on_edit(field, event_target_value(&ev))
                        />
                    }.into_any(),
                };
                view! { <td class="table__cell">{cell}</td> }
            }).collect_view()}
        </tr>
    }
}
