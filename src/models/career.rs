use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// RIASEC career aptitude type. Scoring happens server-side; the client only
/// labels questions and the calculated result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CareerType {
    R,
    I,
    A,
    S,
    E,
    C,
}

impl CareerType {
    pub const ALL: [CareerType; 6] = [
        CareerType::R,
        CareerType::I,
        CareerType::A,
        CareerType::S,
        CareerType::E,
        CareerType::C,
    ];

    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "R" => Some(CareerType::R),
            "I" => Some(CareerType::I),
            "A" => Some(CareerType::A),
            "S" => Some(CareerType::S),
            "E" => Some(CareerType::E),
            "C" => Some(CareerType::C),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CareerType::R => "R",
            CareerType::I => "I",
            CareerType::A => "A",
            CareerType::S => "S",
            CareerType::E => "E",
            CareerType::C => "C",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CareerType::R => "Thực tế (Realistic)",
            CareerType::I => "Nghiên cứu (Investigative)",
            CareerType::A => "Nghệ thuật (Artistic)",
            CareerType::S => "Xã hội (Social)",
            CareerType::E => "Doanh nghiệp (Enterprising)",
            CareerType::C => "Công việc văn phòng (Conventional)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CareerType::R => "Bạn phù hợp với các công việc thực hành, làm việc với máy móc, thiết bị và công cụ.",
            CareerType::I => "Bạn phù hợp với các công việc nghiên cứu, phân tích và giải quyết vấn đề.",
            CareerType::A => "Bạn phù hợp với các công việc sáng tạo, nghệ thuật và thiết kế.",
            CareerType::S => "Bạn phù hợp với các công việc hỗ trợ, giúp đỡ và làm việc với người khác.",
            CareerType::E => "Bạn phù hợp với các công việc lãnh đạo, kinh doanh và thuyết phục.",
            CareerType::C => "Bạn phù hợp với các công việc văn phòng, quản lý dữ liệu và quy trình.",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerQuestion {
    pub id: u64,
    pub content: String,
    pub career_type: CareerType,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCareerQuestion {
    pub content: String,
    pub career_type: CareerType,
}

/// POST /career-question/calculate body: question id -> agreement (1..=5).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CareerAnswers {
    pub answers: HashMap<u64, u8>,
}
