use crate::domain::a001_account::ui::list::AccountList;
use crate::domain::a002_standard_category::ui::list::StandardCategoryList;
use crate::domain::a003_fabric_component::ui::list::FabricComponentList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::auth::guard::PageGuard;
use crate::system::pages::home::HomePage;
use crate::system::pages::unauthorized::UnauthorizedPage;
use crate::usecases::u501_hs_classification::HsClassificationPage;
use crate::usecases::u502_mapping_rules::MappingRulesPage;
use crate::usecases::u503_excel_upload::ExcelUploadPage;
use contracts::system::access::PageKey;
use leptos::prelude::*;

fn page_view(page: PageKey) -> AnyView {
    match page {
        PageKey::Home => view! { <HomePage /> }.into_any(),
        PageKey::HsClassification => view! { <HsClassificationPage /> }.into_any(),
        PageKey::MappingRules => view! { <MappingRulesPage /> }.into_any(),
        PageKey::ExcelUpload => view! { <ExcelUploadPage /> }.into_any(),
        PageKey::StandardCategories => view! { <StandardCategoryList /> }.into_any(),
        PageKey::FabricComponents => view! { <FabricComponentList /> }.into_any(),
        PageKey::Accounts => view! { <AccountList /> }.into_any(),
        PageKey::Unauthorized => view! { <UnauthorizedPage /> }.into_any(),
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    {move || {
                        let page = ctx.active.get();
                        view! {
                            <PageGuard page=page>
                                {page_view(page)}
                            </PageGuard>
                        }
                    }}
                }.into_any()
            }
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}
