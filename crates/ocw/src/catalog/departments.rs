//! The offering-organization tree backing the cascading department
//! selector.
//!
//! Four fixed levels: university, course level (bachelor or graduate),
//! school, department. The tree is compiled in and read-only; lookups
//! return `None` for unknown labels instead of guessing. Bachelor
//! departments end in 系, graduate ones in コース, and a handful of
//! shared-subject groups sit alongside the regular schools.

use super::Catalog;
use serde::Serialize;

/// Departments offered by one university, grouped by course level.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UniversityDepartments {
    pub university: &'static str,
    pub levels: &'static [LevelDepartments],
}

/// One course level within a university.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LevelDepartments {
    pub level: &'static str,
    pub schools: &'static [SchoolDepartments],
}

/// The departments offered by one school.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SchoolDepartments {
    pub school: &'static str,
    pub departments: &'static [&'static str],
}

impl UniversityDepartments {
    /// Looks up a course level by its label.
    pub fn level(&self, label: &str) -> Option<&'static LevelDepartments> {
        self.levels.iter().find(|l| l.level == label)
    }
}

impl LevelDepartments {
    /// Looks up a school by its label.
    pub fn school(&self, label: &str) -> Option<&'static SchoolDepartments> {
        self.schools.iter().find(|s| s.school == label)
    }
}

/// Looks up a university's subtree by name.
pub fn university(name: &str) -> Option<&'static UniversityDepartments> {
    DEPARTMENTS.options.iter().find(|u| u.university == name)
}

/// The full offering-organization tree.
///
/// Only 東京工業大学 carries a subtree; the other selectable university
/// has no department data yet.
pub static DEPARTMENTS: Catalog<&'static [UniversityDepartments]> = Catalog {
    placeholder: "開講元を選択",
    options: &[UniversityDepartments {
        university: "東京工業大学",
        levels: &[
            LevelDepartments {
                level: "学士課程",
                schools: &[
                    SchoolDepartments {
                        school: "理学院",
                        departments: &["数学系", "物理学系", "化学系", "地球惑星科学系"],
                    },
                    SchoolDepartments {
                        school: "工学院",
                        departments: &[
                            "機械系",
                            "システム制御系",
                            "電気電子系",
                            "情報通信系",
                            "経営工学系",
                        ],
                    },
                    SchoolDepartments {
                        school: "物質理工学院",
                        departments: &["材料系", "応用化学系"],
                    },
                    SchoolDepartments {
                        school: "情報理工学院",
                        departments: &["数理・計算科学系", "情報工学系"],
                    },
                    SchoolDepartments {
                        school: "生命理工学院",
                        departments: &["生命理工学系"],
                    },
                    SchoolDepartments {
                        school: "環境・社会理工学院",
                        departments: &["建築学系", "土木・環境工学系", "融合理工学系"],
                    },
                    SchoolDepartments {
                        school: "工学院，物質理工学院，環境・社会理工学院共通科目",
                        departments: &["工学院，物質理工学院，環境・社会理工学院共通科目"],
                    },
                    SchoolDepartments {
                        school: "教養科目群",
                        departments: &[
                            "文系教養科目",
                            "英語科目",
                            "第二外国語科目",
                            "日本語・日本文化科目",
                            "教職科目",
                            "アントレプレナーシップ科目",
                            "広域教養科目",
                            "理工系教養科目",
                        ],
                    },
                ],
            },
            LevelDepartments {
                level: "大学院課程",
                schools: &[
                    SchoolDepartments {
                        school: "理学院",
                        departments: &[
                            "数学コース",
                            "物理学コース",
                            "化学コース",
                            "エネルギーコース",
                            "エネルギー・情報コース",
                            "地球惑星科学コース",
                            "地球生命コース",
                        ],
                    },
                    SchoolDepartments {
                        school: "工学院",
                        departments: &[
                            "機械コース",
                            "エネルギーコース",
                            "エネルギー・情報コース",
                            "エンジニアリングデザインコース",
                            "ライフエンジニアリングコース",
                            "原子核工学コース",
                            "システム制御コース",
                            "電気電子コース",
                            "情報通信コース",
                            "経営工学コース",
                        ],
                    },
                    SchoolDepartments {
                        school: "物質理工学院",
                        departments: &[
                            "材料コース",
                            "応用化学コース",
                            "エネルギーコース",
                            "エネルギー・情報コース",
                            "ライフエンジニアリングコース",
                            "原子核工学コース",
                            "地球生命コース",
                        ],
                    },
                    SchoolDepartments {
                        school: "情報理工学院",
                        departments: &[
                            "数理・計算科学コース",
                            "情報工学コース",
                            "知能情報コース",
                            "エネルギー・情報コース",
                            "ライフエンジニアリングコース",
                        ],
                    },
                    SchoolDepartments {
                        school: "生命理工学院",
                        departments: &[
                            "生命理工学コース",
                            "ライフエンジニアリングコース",
                            "地球生命コース",
                        ],
                    },
                    SchoolDepartments {
                        school: "環境・社会理工学院",
                        departments: &[
                            "建築学コース",
                            "土木工学コース",
                            "融合理工学コース",
                            "エンジニアリングデザインコース",
                            "都市・環境学コース",
                            "地球環境共創コース",
                            "エネルギーコース",
                            "エネルギー・情報コース",
                            "原子核工学コース",
                            "社会・人間科学コース",
                            "イノベーション科学コース",
                            "技術経営専門職学位課程",
                        ],
                    },
                    SchoolDepartments {
                        school: "教養科目群",
                        departments: &[
                            "文系教養科目",
                            "英語科目",
                            "第二外国語科目",
                            "日本語・日本文化科目",
                            "教職科目",
                            "アントレプレナーシップ科目",
                            "広域教養科目",
                            "キャリア科目",
                        ],
                    },
                ],
            },
        ],
    }],
};
