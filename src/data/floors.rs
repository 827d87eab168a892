//! Compiled-in floor layouts and spawn tables.
//!
//! Template symbols: `-` rock, `/` corridor, `0`-`9` room cells tagged with the room id.

const FLOOR_0: &str = concat!(
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
    "--------------------------------1111111111111111--------------------------------",
    "--------------------------------1111111111111111--------------------------------",
    "-----00000000000000-------------1111111111111111--------------------------------",
    "-----00000000000000-------------1111111111111111///////////////////-------------",
    "-----00000000000000-------------1111111111111111------------------/-------------",
    "-----00000000000000/////////////1111111111111111------------------/-------------",
    "-----00000000000000-------------1111111111111111------------------/-------------",
    "-----00000000000000-------------1111111111111111------------------/-------------",
    "-----00000000000000-----------------------------------------222222222222222-----",
    "-----00000000000000-----------------------------------------222222222222222-----",
    "-----00000000000000-----------------------------------------222222222222222-----",
    "------------------------------------------------------------222222222222222-----",
    "------------------------------------------------------------222222222222222-----",
    "------------------------------------------------------------222222222222222-----",
    "------------------------------------------------------------222222222222222-----",
    "------------------------------------------------------------222222222222222-----",
    "------------------------------------------------------------222222222222222-----",
    "------------------------------------------------------------222222222222222-----",
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
);

const FLOOR_1: &str = concat!(
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
    "----------------------------------------------------------2222222222222222------",
    "----------------------------------------------------------2222222222222222------",
    "----------------------------------------------------------2222222222222222------",
    "-----000000000000-----------------------------------------2222222222222222------",
    "-----000000000000-----------------------------------------2222222222222222------",
    "-----000000000000-----------------------------------------2222222222222222------",
    "-----000000000000-----------------------------------------2222222222222222------",
    "-----000000000000-----------------------------------------2222222222222222------",
    "-----000000000000//////////////////-----------------------2222222222222222------",
    "-----000000000000-----------------/-----------------------2222222222222222------",
    "-----000000000000-----------------/-----------------------------/---------------",
    "-----000000000000-----------------/-----------------------------/---------------",
    "-----000000000000-----------111111111111111111------------------/---------------",
    "-----000000000000-----------111111111111111111------------------/---------------",
    "-----000000000000-----------111111111111111111------------------/---------------",
    "----------------------------111111111111111111///////////////////---------------",
    "----------------------------111111111111111111----------------------------------",
    "----------------------------111111111111111111----------------------------------",
    "----------------------------111111111111111111----------------------------------",
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
);

const FLOOR_2: &str = concat!(
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
    "-----0000000000000000-----------------------------------------------------------",
    "-----0000000000000000-----------------------222222222222------------------------",
    "-----0000000000000000-----------------------222222222222------------------------",
    "-----0000000000000000-----------------------222222222222------------------------",
    "-----0000000000000000-----------------------222222222222------------------------",
    "-----0000000000000000-----------------------222222222222------------------------",
    "----------/---------------------------------222222222222------------------------",
    "----------/---------------------------------222222222222/////////////-----------",
    "----------/---------------------------------222222222222------------/-----------",
    "----------/---------------------------------222222222222--------333333333333----",
    "----------/---------------------------------222222222222--------333333333333----",
    "--------11111111111111111111----------------222222222222--------333333333333----",
    "--------11111111111111111111----------------222222222222--------333333333333----",
    "--------11111111111111111111/////////////////-------------------333333333333----",
    "--------11111111111111111111------------------------------------333333333333----",
    "--------11111111111111111111------------------------------------333333333333----",
    "--------11111111111111111111------------------------------------333333333333----",
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
);

const FLOOR_3: &str = concat!(
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
    "--------------------------11111111111111----------------------------------------",
    "--------------------------11111111111111----------------------------------------",
    "--------------------------11111111111111----------------------------------------",
    "-----0000000000-----------11111111111111----------------------------------------",
    "-----0000000000-----------11111111111111----------------333333333333333333------",
    "-----0000000000///////////11111111111111----------------333333333333333333------",
    "-----0000000000-----------11111111111111----------------333333333333333333------",
    "-----0000000000-----------------/-----------------------333333333333333333------",
    "-----0000000000-----------------/-----------------------333333333333333333------",
    "-----0000000000-----------------/-----------------------333333333333333333------",
    "-----0000000000-----------------/-----------------------333333333333333333------",
    "-----0000000000-----------------/-----------------------333333333333333333------",
    "-----0000000000-----------22222222222222----------------333333333333333333------",
    "--------------------------22222222222222----------------333333333333333333------",
    "--------------------------22222222222222----------------333333333333333333------",
    "--------------------------22222222222222----------------333333333333333333------",
    "--------------------------22222222222222/////////////////////-------------------",
    "--------------------------22222222222222----------------------------------------",
    "--------------------------22222222222222----------------------------------------",
    "--------------------------22222222222222----------------------------------------",
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
);

const FLOOR_4: &str = concat!(
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------222222222222------",
    "--------------------------------------------------------------222222222222------",
    "-----00000000000000-------------------------------------------222222222222------",
    "-----00000000000000-------------------------------------------222222222222------",
    "-----00000000000000-------------------------------------------222222222222------",
    "-----00000000000000-------------------------------------------222222222222------",
    "-----00000000000000---------------111111111111----------------222222222222------",
    "-----00000000000000---------------111111111111----------------222222222222------",
    "-----00000000000000---------------111111111111////////////////222222222222------",
    "-----00000000000000///////////////111111111111----------------222222222222------",
    "-----00000000000000---------------111111111111----------------222222222222------",
    "-----00000000000000---------------111111111111----------------222222222222------",
    "-----00000000000000-------------------------------------------222222222222------",
    "-----00000000000000-------------------------------------------222222222222------",
    "-----00000000000000-------------------------------------------222222222222------",
    "-----00000000000000-------------------------------------------222222222222------",
    "--------------------------------------------------------------222222222222------",
    "--------------------------------------------------------------222222222222------",
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
);

const FLOOR_5: &str = concat!(
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
    "----------------------------------------------222222222222----------------------",
    "----------------------------------------------222222222222----------------------",
    "----------------------------------------------222222222222----------------------",
    "-----000000000--------------------------------222222222222///////////-----------",
    "-----000000000--------------------------------222222222222----------/-----------",
    "-----000000000--------------------------------222222222222----------/-----------",
    "-----000000000--------------------------------222222222222----------/-----------",
    "-----000000000--------------------------------222222222222----------/-----------",
    "-----000000000------------------------------------/-----------------/-----------",
    "-----000000000------------------------------------/-----------------/-----------",
    "-----000000000////////11111111111111--------------/-------------333333333333----",
    "----------------------11111111111111--------------/-------------333333333333----",
    "----------------------11111111111111--------------/-------------333333333333----",
    "----------------------11111111111111///////////////-------------333333333333----",
    "----------------------11111111111111----------------------------333333333333----",
    "----------------------11111111111111----------------------------333333333333----",
    "----------------------11111111111111----------------------------333333333333----",
    "----------------------11111111111111----------------------------333333333333----",
    "----------------------11111111111111----------------------------333333333333----",
    "----------------------11111111111111--------------------------------------------",
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
);

const FLOOR_6: &str = concat!(
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
    "--------------------------------------22222222222222----------------------------",
    "-----00000000000000000000-------------22222222222222----------------------------",
    "-----00000000000000000000-------------22222222222222----------------------------",
    "-----00000000000000000000/////////////22222222222222----------------------------",
    "-----00000000000000000000-------------22222222222222------------333333333333----",
    "-----00000000000000000000-------------22222222222222------------333333333333----",
    "--------------/-----------------------22222222222222------------333333333333----",
    "--------------/-----------------------22222222222222------------333333333333----",
    "--------------/-----------------------22222222222222------------333333333333----",
    "--------------/-----------------------22222222222222////////////333333333333----",
    "-----11111111111111111111-------------22222222222222------------333333333333----",
    "-----11111111111111111111-------------22222222222222------------333333333333----",
    "-----11111111111111111111-------------22222222222222------------333333333333----",
    "-----11111111111111111111-------------22222222222222------------333333333333----",
    "-----11111111111111111111-------------------------------------------------------",
    "-----11111111111111111111-------------------------------------------------------",
    "-----11111111111111111111-------------------------------------------------------",
    "-----11111111111111111111-------------------------------------------------------",
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
);

const FLOOR_7: &str = concat!(
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------222222222222------",
    "-----000000000000---------------------------------------------222222222222------",
    "-----000000000000---------------------------------------------222222222222------",
    "-----000000000000---------------------------------------------222222222222------",
    "-----000000000000-------------11111111111111111111------------222222222222------",
    "-----000000000000-------------11111111111111111111------------222222222222------",
    "-----000000000000/////////////11111111111111111111------------222222222222------",
    "-----000000000000-------------11111111111111111111------------222222222222------",
    "-----000000000000-------------11111111111111111111////////////222222222222------",
    "-----000000000000-------------11111111111111111111------------222222222222------",
    "-----000000000000-------------11111111111111111111------------222222222222------",
    "------------------------------11111111111111111111------------222222222222------",
    "--------------------------------------------------------------222222222222------",
    "--------------------------------------------------------------222222222222------",
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
    "--------------------------------------------------------------------------------",
);

pub(super) struct FloorTable {
    pub template: &'static str,
    pub entry: (i32, i32),
    pub stairs: (i32, i32),
    pub amulet: Option<(i32, i32)>,
    pub enemies: &'static [(i32, i32)],
}

pub(super) const FLOOR_TABLES: [FloorTable; super::FLOORS] = [
    FloorTable {
        template: FLOOR_0,
        entry: (5, 5),
        stairs: (70, 18),
        amulet: None,
        enemies: &[(40, 9)],
    },
    FloorTable {
        template: FLOOR_1,
        entry: (5, 5),
        stairs: (72, 4),
        amulet: None,
        enemies: &[(30, 19), (66, 3)],
    },
    FloorTable {
        template: FLOOR_2,
        entry: (5, 5),
        stairs: (74, 20),
        amulet: None,
        enemies: &[(22, 20), (50, 16)],
    },
    FloorTable {
        template: FLOOR_3,
        entry: (5, 5),
        stairs: (62, 8),
        amulet: Some((72, 16)),
        enemies: &[(28, 20), (70, 15)],
    },
    FloorTable {
        template: FLOOR_4,
        entry: (5, 5),
        stairs: (70, 19),
        amulet: None,
        enemies: &[(36, 10), (64, 4)],
    },
    FloorTable {
        template: FLOOR_5,
        entry: (5, 5),
        stairs: (74, 19),
        amulet: None,
        enemies: &[(24, 20), (52, 3)],
    },
    FloorTable {
        template: FLOOR_6,
        entry: (5, 5),
        stairs: (72, 16),
        amulet: None,
        enemies: &[(10, 19), (44, 16)],
    },
    FloorTable {
        template: FLOOR_7,
        entry: (5, 5),
        stairs: (68, 6),
        amulet: None,
        enemies: &[(40, 14), (70, 16)],
    },
];
