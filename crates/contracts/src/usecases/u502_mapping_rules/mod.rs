pub mod request;
pub mod session;

pub use request::{MappingField, MappingRule};
pub use session::MappingRuleSession;

use crate::usecases::common::UseCaseMetadata;

/// Body: array of rules. Answer: the same rules with `hsCode` filled in.
pub const MAP_PATH: &str = "/api/v1/mapping/map-to-hs-code";

pub struct MappingRules;

impl UseCaseMetadata for MappingRules {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "mapping_rules"
    }

    fn display_name() -> &'static str {
        "HS 코드 매핑 관리"
    }

    fn description() -> &'static str {
        "템플릿으로 제품 속성을 입력하고 HS코드를 일괄 매핑합니다"
    }
}
