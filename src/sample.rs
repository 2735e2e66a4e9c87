// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Built-in demo profile and expense history (2023-2025).

use crate::models::{
    CategorySettings, Currency, DashboardView, DateFormat, DateRange, DisplayPreferences, Expense,
    NumberFormat, Notifications, Theme, UserProfile,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

fn category(name: &str, budget: i64, color: &str) -> (String, CategorySettings) {
    (
        name.to_string(),
        CategorySettings {
            name: name.to_string(),
            enabled: true,
            budget: Some(Decimal::from(budget)),
            color: color.to_string(),
            is_custom: false,
        },
    )
}

pub fn sample_profile() -> UserProfile {
    let category_settings: BTreeMap<String, CategorySettings> = [
        category("Food", 8000, "#F66D44"),
        category("Transport", 3000, "#2D87BB"),
        category("Bills", 5000, "#64C2A6"),
        category("Entertainment", 2000, "#FEAE65"),
    ]
    .into_iter()
    .collect();

    UserProfile {
        id: 1,
        name: "Juan Dela Cruz".into(),
        email: "juan@example.com".into(),
        phone: Some("+63 912 345 6789".into()),
        monthly_budget: Decimal::from(20000),
        date_format: DateFormat::MonthDayYear,
        budget_reset_day: 1,
        budget_alert_threshold: 80,
        currency: Currency::Php,
        number_format: NumberFormat::Standard,
        category_settings,
        notifications: Notifications {
            email_enabled: true,
            budget_warnings: true,
            weekly_summary: false,
            monthly_summary: true,
        },
        display_preferences: DisplayPreferences {
            theme: Theme::Light,
            default_date_range: DateRange::ThisMonth,
            dashboard_view: DashboardView::Detailed,
        },
    }
}

pub fn sample_expenses() -> Vec<Expense> {
    SAMPLE_ROWS
        .iter()
        .filter_map(|&(id, y, m, d, cat, amount, notes)| {
            Some(Expense {
                id,
                date: NaiveDate::from_ymd_opt(y, m, d)?,
                category: cat.to_string(),
                amount: Decimal::from(amount),
                notes: Some(notes.to_string()),
            })
        })
        .collect()
}

#[rustfmt::skip]
const SAMPLE_ROWS: &[(i64, i32, u32, u32, &str, i64, &str)] = &[
    (100, 2023, 1, 5, "Food", 320, "Groceries"),
    (101, 2023, 1, 8, "Bills", 1650, "Meralco bill"),
    (102, 2023, 1, 10, "Transport", 480, "Monthly transport pass"),
    (103, 2023, 1, 15, "Food", 1100, "Restaurant dinner"),
    (104, 2023, 1, 20, "Entertainment", 750, "Movie tickets"),
    (105, 2023, 1, 25, "Bills", 1150, "Internet bill"),
    (106, 2023, 1, 28, "Food", 420, "Weekly groceries"),
    (200, 2023, 2, 3, "Food", 280, "Breakfast"),
    (201, 2023, 2, 5, "Transport", 580, "Grab rides"),
    (202, 2023, 2, 8, "Bills", 1580, "Meralco bill"),
    (203, 2023, 2, 12, "Entertainment", 1100, "Concert tickets"),
    (204, 2023, 2, 15, "Food", 520, "Valentine's dinner"),
    (205, 2023, 2, 20, "Bills", 800, "Water bill"),
    (206, 2023, 2, 25, "Food", 360, "Groceries"),
    (107, 2023, 3, 2, "Food", 380, "Lunch"),
    (108, 2023, 3, 5, "Transport", 420, "Jeepney fares"),
    (109, 2023, 3, 8, "Bills", 1800, "Meralco bill"),
    (110, 2023, 3, 12, "Food", 620, "Restaurant"),
    (111, 2023, 3, 18, "Entertainment", 450, "Coffee shop"),
    (112, 2023, 3, 22, "Bills", 1050, "Internet bill"),
    (113, 2023, 3, 28, "Food", 500, "Groceries"),
    (207, 2023, 4, 4, "Food", 300, "Breakfast"),
    (208, 2023, 4, 7, "Transport", 530, "Transport pass"),
    (209, 2023, 4, 10, "Bills", 1620, "Meralco bill"),
    (210, 2023, 4, 15, "Entertainment", 820, "Cinema"),
    (211, 2023, 4, 20, "Food", 700, "Dinner"),
    (212, 2023, 4, 25, "Bills", 900, "Water bill"),
    (213, 2023, 4, 30, "Food", 460, "Groceries"),
    (214, 2023, 5, 3, "Food", 360, "Lunch"),
    (215, 2023, 5, 6, "Transport", 460, "Jeepney fares"),
    (216, 2023, 5, 9, "Bills", 1780, "Meralco bill"),
    (217, 2023, 5, 14, "Food", 880, "Restaurant"),
    (218, 2023, 5, 19, "Entertainment", 1050, "Beach trip"),
    (219, 2023, 5, 24, "Bills", 1000, "Internet bill"),
    (220, 2023, 5, 29, "Food", 540, "Groceries"),
    (256, 2023, 6, 2, "Food", 260, "Breakfast"),
    (257, 2023, 6, 5, "Transport", 490, "Grab rides"),
    (258, 2023, 6, 8, "Bills", 1950, "Meralco bill (summer)"),
    (259, 2023, 6, 13, "Entertainment", 680, "Movie"),
    (260, 2023, 6, 18, "Food", 640, "Dinner"),
    (261, 2023, 6, 23, "Bills", 820, "Water bill"),
    (262, 2023, 6, 28, "Food", 420, "Groceries"),
    (221, 2023, 7, 4, "Food", 390, "Lunch"),
    (222, 2023, 7, 7, "Transport", 470, "Transport pass"),
    (223, 2023, 7, 10, "Bills", 2100, "Meralco bill"),
    (224, 2023, 7, 15, "Food", 810, "Restaurant"),
    (225, 2023, 7, 20, "Entertainment", 570, "Coffee"),
    (226, 2023, 7, 25, "Bills", 1100, "Internet bill"),
    (227, 2023, 7, 30, "Food", 490, "Groceries"),
    (228, 2023, 8, 3, "Food", 340, "Breakfast"),
    (229, 2023, 8, 6, "Transport", 520, "Jeepney fares"),
    (230, 2023, 8, 9, "Bills", 1980, "Meralco bill"),
    (231, 2023, 8, 14, "Entertainment", 1250, "Concert"),
    (232, 2023, 8, 19, "Food", 690, "Dinner"),
    (233, 2023, 8, 24, "Bills", 950, "Water bill"),
    (234, 2023, 8, 29, "Food", 470, "Groceries"),
    (263, 2023, 9, 2, "Food", 300, "Lunch"),
    (264, 2023, 9, 5, "Transport", 470, "Grab rides"),
    (265, 2023, 9, 8, "Bills", 1750, "Meralco bill"),
    (266, 2023, 9, 13, "Food", 720, "Restaurant"),
    (267, 2023, 9, 18, "Entertainment", 500, "Movie"),
    (268, 2023, 9, 23, "Bills", 1020, "Internet bill"),
    (269, 2023, 9, 28, "Food", 450, "Groceries"),
    (235, 2023, 10, 3, "Food", 290, "Breakfast"),
    (236, 2023, 10, 6, "Transport", 510, "Transport pass"),
    (237, 2023, 10, 9, "Bills", 1680, "Meralco bill"),
    (238, 2023, 10, 14, "Entertainment", 800, "Cinema"),
    (239, 2023, 10, 19, "Food", 660, "Dinner"),
    (240, 2023, 10, 24, "Bills", 890, "Water bill"),
    (241, 2023, 10, 28, "Food", 300, "Groceries"),
    (242, 2023, 10, 30, "Transport", 110, "Grab ride"),
    (243, 2023, 11, 2, "Food", 240, "Tapsilog breakfast"),
    (244, 2023, 11, 3, "Transport", 70, "Jeepney fare"),
    (245, 2023, 11, 3, "Bills", 1450, "Meralco bill"),
    (246, 2023, 11, 4, "Entertainment", 380, "Cinema ticket"),
    (247, 2023, 11, 5, "Food", 170, "Lunch at carinderia"),
    (248, 2023, 11, 6, "Transport", 110, "Grab ride"),
    (249, 2023, 11, 8, "Bills", 950, "PLDT internet"),
    (250, 2023, 11, 9, "Entertainment", 280, "Coffee with friends"),
    (251, 2023, 11, 10, "Food", 200, "Dinner"),
    (252, 2023, 11, 11, "Transport", 50, "Tricycle fare"),
    (253, 2023, 11, 15, "Food", 430, "Restaurant"),
    (254, 2023, 11, 20, "Bills", 800, "Water bill"),
    (255, 2023, 11, 25, "Food", 360, "Groceries"),
    (270, 2023, 12, 2, "Food", 380, "Lunch"),
    (271, 2023, 12, 5, "Transport", 550, "Holiday transport"),
    (272, 2023, 12, 8, "Bills", 1900, "Meralco bill"),
    (273, 2023, 12, 12, "Entertainment", 1400, "Christmas party"),
    (274, 2023, 12, 15, "Food", 1150, "Holiday dinner"),
    (275, 2023, 12, 20, "Entertainment", 1800, "Gift shopping"),
    (276, 2023, 12, 23, "Food", 900, "Christmas groceries"),
    (132, 2024, 1, 5, "Food", 340, "Groceries"),
    (133, 2024, 1, 8, "Bills", 1720, "Meralco bill"),
    (134, 2024, 1, 10, "Transport", 490, "Monthly transport pass"),
    (135, 2024, 1, 15, "Food", 1150, "Restaurant dinner"),
    (136, 2024, 1, 20, "Entertainment", 780, "Movie tickets"),
    (137, 2024, 1, 25, "Bills", 1180, "Internet bill"),
    (138, 2024, 1, 28, "Food", 440, "Weekly groceries"),
    (139, 2024, 2, 3, "Food", 270, "Breakfast"),
    (140, 2024, 2, 5, "Transport", 580, "Grab rides"),
    (141, 2024, 2, 8, "Bills", 1600, "Meralco bill"),
    (142, 2024, 2, 12, "Entertainment", 1150, "Concert tickets"),
    (143, 2024, 2, 15, "Food", 530, "Valentine's dinner"),
    (144, 2024, 2, 20, "Bills", 800, "Water bill"),
    (172, 2024, 2, 25, "Food", 380, "Groceries"),
    (173, 2024, 2, 28, "Transport", 120, "Jeepney fares"),
    (174, 2024, 3, 2, "Food", 360, "Lunch"),
    (175, 2024, 3, 5, "Transport", 440, "Jeepney fares"),
    (176, 2024, 3, 8, "Bills", 1820, "Meralco bill"),
    (177, 2024, 3, 12, "Food", 600, "Restaurant"),
    (178, 2024, 3, 18, "Entertainment", 480, "Coffee shop"),
    (179, 2024, 3, 22, "Bills", 1080, "Internet bill"),
    (180, 2024, 3, 28, "Food", 490, "Groceries"),
    (181, 2024, 3, 30, "Transport", 150, "Grab ride"),
    (145, 2024, 4, 4, "Food", 310, "Breakfast"),
    (146, 2024, 4, 7, "Transport", 540, "Transport pass"),
    (147, 2024, 4, 10, "Bills", 1680, "Meralco bill"),
    (148, 2024, 4, 15, "Entertainment", 850, "Cinema"),
    (149, 2024, 4, 20, "Food", 730, "Dinner"),
    (150, 2024, 4, 25, "Bills", 920, "Water bill"),
    (182, 2024, 4, 28, "Food", 450, "Groceries"),
    (183, 2024, 4, 30, "Transport", 110, "Jeepney fare"),
    (184, 2024, 5, 3, "Food", 350, "Lunch"),
    (185, 2024, 5, 6, "Transport", 470, "Jeepney fares"),
    (186, 2024, 5, 9, "Bills", 1790, "Meralco bill"),
    (187, 2024, 5, 14, "Food", 870, "Restaurant"),
    (188, 2024, 5, 19, "Entertainment", 1080, "Beach trip"),
    (189, 2024, 5, 24, "Bills", 1010, "Internet bill"),
    (190, 2024, 5, 29, "Food", 520, "Groceries"),
    (191, 2024, 5, 31, "Transport", 130, "Grab ride"),
    (192, 2024, 6, 2, "Food", 280, "Breakfast"),
    (193, 2024, 6, 5, "Transport", 500, "Grab rides"),
    (194, 2024, 6, 8, "Bills", 1970, "Meralco bill (summer)"),
    (195, 2024, 6, 13, "Entertainment", 690, "Movie"),
    (196, 2024, 6, 18, "Food", 650, "Dinner"),
    (197, 2024, 6, 23, "Bills", 840, "Water bill"),
    (198, 2024, 6, 28, "Food", 410, "Groceries"),
    (199, 2024, 6, 30, "Transport", 140, "Jeepney fare"),
    (151, 2024, 7, 4, "Food", 400, "Lunch"),
    (152, 2024, 7, 7, "Transport", 480, "Transport pass"),
    (153, 2024, 7, 10, "Bills", 2150, "Meralco bill"),
    (154, 2024, 7, 15, "Food", 830, "Restaurant"),
    (155, 2024, 7, 20, "Entertainment", 580, "Coffee"),
    (156, 2024, 7, 25, "Bills", 1120, "Internet bill"),
    (313, 2024, 7, 28, "Food", 480, "Groceries"),
    (314, 2024, 7, 30, "Transport", 160, "Grab ride"),
    (315, 2024, 8, 3, "Food", 330, "Breakfast"),
    (316, 2024, 8, 6, "Transport", 530, "Jeepney fares"),
    (317, 2024, 8, 9, "Bills", 1990, "Meralco bill"),
    (318, 2024, 8, 14, "Entertainment", 1280, "Concert"),
    (319, 2024, 8, 19, "Food", 680, "Dinner"),
    (320, 2024, 8, 24, "Bills", 960, "Water bill"),
    (321, 2024, 8, 29, "Food", 460, "Groceries"),
    (322, 2024, 8, 31, "Transport", 125, "Jeepney fare"),
    (323, 2024, 9, 2, "Food", 310, "Lunch"),
    (324, 2024, 9, 5, "Transport", 480, "Grab rides"),
    (325, 2024, 9, 8, "Bills", 1760, "Meralco bill"),
    (326, 2024, 9, 13, "Food", 710, "Restaurant"),
    (327, 2024, 9, 18, "Entertainment", 510, "Movie"),
    (328, 2024, 9, 23, "Bills", 1030, "Internet bill"),
    (329, 2024, 9, 28, "Food", 440, "Groceries"),
    (330, 2024, 9, 30, "Transport", 115, "Jeepney fare"),
    (157, 2024, 10, 3, "Food", 300, "Breakfast"),
    (158, 2024, 10, 6, "Transport", 520, "Transport pass"),
    (159, 2024, 10, 9, "Bills", 1730, "Meralco bill"),
    (160, 2024, 10, 14, "Entertainment", 820, "Cinema"),
    (161, 2024, 10, 19, "Food", 670, "Dinner"),
    (162, 2024, 10, 24, "Bills", 900, "Water bill"),
    (163, 2024, 10, 28, "Food", 310, "Groceries"),
    (312, 2024, 10, 30, "Transport", 105, "Grab ride"),
    (302, 2024, 11, 2, "Food", 250, "Tapsilog breakfast"),
    (303, 2024, 11, 3, "Transport", 75, "Jeepney fare"),
    (304, 2024, 11, 5, "Bills", 1470, "Meralco bill"),
    (305, 2024, 11, 6, "Entertainment", 390, "Cinema ticket"),
    (306, 2024, 11, 8, "Food", 175, "Lunch at carinderia"),
    (307, 2024, 11, 10, "Transport", 115, "Grab ride"),
    (308, 2024, 11, 12, "Bills", 970, "PLDT internet"),
    (309, 2024, 11, 15, "Entertainment", 290, "Coffee with friends"),
    (310, 2024, 11, 18, "Food", 210, "Dinner"),
    (311, 2024, 11, 20, "Bills", 810, "Water bill"),
    (301, 2024, 11, 25, "Food", 370, "Groceries"),
    (300, 2024, 11, 28, "Transport", 55, "Tricycle fare"),
    (164, 2024, 12, 2, "Food", 410, "Lunch"),
    (165, 2024, 12, 5, "Transport", 570, "Holiday transport"),
    (166, 2024, 12, 8, "Bills", 1920, "Meralco bill"),
    (167, 2024, 12, 12, "Entertainment", 1450, "Christmas party"),
    (168, 2024, 12, 15, "Food", 1180, "Holiday dinner"),
    (169, 2024, 12, 20, "Entertainment", 1900, "Gift shopping"),
    (170, 2024, 12, 23, "Food", 930, "Christmas groceries"),
    (171, 2024, 12, 25, "Entertainment", 750, "Christmas celebration"),
    (1, 2025, 1, 5, "Food", 350, "Groceries"),
    (2, 2025, 1, 8, "Bills", 1800, "Meralco bill"),
    (3, 2025, 1, 10, "Transport", 500, "Monthly transport pass"),
    (4, 2025, 1, 15, "Food", 1200, "Restaurant dinner"),
    (5, 2025, 1, 20, "Entertainment", 800, "Movie tickets"),
    (6, 2025, 1, 25, "Bills", 1200, "Internet bill"),
    (7, 2025, 1, 28, "Food", 450, "Weekly groceries"),
    (8, 2025, 2, 3, "Food", 280, "Breakfast"),
    (9, 2025, 2, 5, "Transport", 600, "Grab rides"),
    (10, 2025, 2, 8, "Bills", 1650, "Meralco bill"),
    (11, 2025, 2, 12, "Entertainment", 1200, "Concert tickets"),
    (12, 2025, 2, 15, "Food", 550, "Valentine's dinner"),
    (13, 2025, 2, 20, "Bills", 850, "Water bill"),
    (14, 2025, 2, 25, "Food", 380, "Groceries"),
    (15, 2025, 3, 2, "Food", 420, "Lunch"),
    (16, 2025, 3, 5, "Transport", 450, "Jeepney fares"),
    (17, 2025, 3, 8, "Bills", 1950, "Meralco bill"),
    (18, 2025, 3, 12, "Food", 680, "Restaurant"),
    (19, 2025, 3, 18, "Entertainment", 500, "Coffee shop"),
    (20, 2025, 3, 22, "Bills", 1100, "Internet bill"),
    (21, 2025, 3, 28, "Food", 520, "Groceries"),
    (22, 2025, 4, 4, "Food", 320, "Breakfast"),
    (23, 2025, 4, 7, "Transport", 550, "Transport pass"),
    (24, 2025, 4, 10, "Bills", 1700, "Meralco bill"),
    (25, 2025, 4, 15, "Entertainment", 900, "Cinema"),
    (26, 2025, 4, 20, "Food", 750, "Dinner"),
    (27, 2025, 4, 25, "Bills", 950, "Water bill"),
    (28, 2025, 4, 30, "Food", 480, "Groceries"),
    (29, 2025, 5, 3, "Food", 380, "Lunch"),
    (30, 2025, 5, 6, "Transport", 480, "Jeepney fares"),
    (31, 2025, 5, 9, "Bills", 1850, "Meralco bill"),
    (32, 2025, 5, 14, "Food", 920, "Restaurant"),
    (33, 2025, 5, 19, "Entertainment", 1100, "Beach trip"),
    (34, 2025, 5, 24, "Bills", 1050, "Internet bill"),
    (35, 2025, 5, 29, "Food", 560, "Groceries"),
    (36, 2025, 6, 2, "Food", 290, "Breakfast"),
    (37, 2025, 6, 5, "Transport", 520, "Grab rides"),
    (38, 2025, 6, 8, "Bills", 2100, "Meralco bill (summer)"),
    (39, 2025, 6, 13, "Entertainment", 750, "Movie"),
    (40, 2025, 6, 18, "Food", 680, "Dinner"),
    (41, 2025, 6, 23, "Bills", 880, "Water bill"),
    (42, 2025, 6, 28, "Food", 440, "Groceries"),
    (43, 2025, 7, 4, "Food", 410, "Lunch"),
    (44, 2025, 7, 7, "Transport", 490, "Transport pass"),
    (45, 2025, 7, 10, "Bills", 2200, "Meralco bill"),
    (46, 2025, 7, 15, "Food", 850, "Restaurant"),
    (47, 2025, 7, 20, "Entertainment", 600, "Coffee"),
    (48, 2025, 7, 25, "Bills", 1150, "Internet bill"),
    (49, 2025, 7, 30, "Food", 510, "Groceries"),
    (50, 2025, 8, 3, "Food", 360, "Breakfast"),
    (51, 2025, 8, 6, "Transport", 540, "Jeepney fares"),
    (52, 2025, 8, 9, "Bills", 2050, "Meralco bill"),
    (53, 2025, 8, 14, "Entertainment", 1300, "Concert"),
    (54, 2025, 8, 19, "Food", 720, "Dinner"),
    (55, 2025, 8, 24, "Bills", 1000, "Water bill"),
    (56, 2025, 8, 29, "Food", 490, "Groceries"),
    (57, 2025, 9, 2, "Food", 340, "Lunch"),
    (58, 2025, 9, 5, "Transport", 510, "Grab rides"),
    (59, 2025, 9, 8, "Bills", 1900, "Meralco bill"),
    (60, 2025, 9, 13, "Food", 780, "Restaurant"),
    (61, 2025, 9, 18, "Entertainment", 550, "Movie"),
    (62, 2025, 9, 23, "Bills", 1080, "Internet bill"),
    (63, 2025, 9, 28, "Food", 470, "Groceries"),
    (64, 2025, 10, 3, "Food", 310, "Breakfast"),
    (65, 2025, 10, 6, "Transport", 530, "Transport pass"),
    (66, 2025, 10, 9, "Bills", 1750, "Meralco bill"),
    (67, 2025, 10, 14, "Entertainment", 850, "Cinema"),
    (68, 2025, 10, 19, "Food", 690, "Dinner"),
    (69, 2025, 10, 24, "Bills", 920, "Water bill"),
    (70, 2025, 10, 28, "Food", 320, "Groceries"),
    (71, 2025, 10, 30, "Transport", 120, "Grab ride"),
    (72, 2025, 11, 2, "Food", 250, "Tapsilog breakfast"),
    (73, 2025, 11, 3, "Transport", 80, "Jeepney fare"),
    (74, 2025, 11, 3, "Bills", 1500, "Meralco bill"),
    (75, 2025, 11, 4, "Entertainment", 400, "Cinema ticket"),
    (76, 2025, 11, 5, "Food", 180, "Lunch at carinderia"),
    (77, 2025, 11, 6, "Transport", 120, "Grab ride"),
    (78, 2025, 11, 8, "Bills", 999, "PLDT internet"),
    (79, 2025, 11, 9, "Entertainment", 300, "Coffee with friends"),
    (80, 2025, 11, 10, "Food", 220, "Dinner"),
    (81, 2025, 11, 11, "Transport", 60, "Tricycle fare"),
    (82, 2025, 11, 15, "Food", 450, "Restaurant"),
    (83, 2025, 11, 20, "Bills", 850, "Water bill"),
    (84, 2025, 11, 25, "Food", 380, "Groceries"),
    (85, 2025, 12, 2, "Food", 420, "Lunch"),
    (86, 2025, 12, 5, "Transport", 580, "Holiday transport"),
    (87, 2025, 12, 8, "Bills", 1950, "Meralco bill"),
    (88, 2025, 12, 12, "Entertainment", 1500, "Christmas party"),
    (89, 2025, 12, 15, "Food", 1200, "Holiday dinner"),
    (90, 2025, 12, 20, "Entertainment", 2000, "Gift shopping"),
    (91, 2025, 12, 23, "Food", 950, "Christmas groceries"),
    (92, 2025, 12, 25, "Entertainment", 800, "Christmas celebration"),
    (93, 2025, 12, 28, "Bills", 1100, "Internet bill"),
    (94, 2025, 12, 30, "Food", 680, "New Year prep"),
];
