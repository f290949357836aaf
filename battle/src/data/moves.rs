//! Generation 3 move table, indexed by move ID

use super::MoveFlags;
use crate::Type;

const NONE: MoveFlags = MoveFlags::empty();
const C: MoveFlags = MoveFlags::CONTACT;
const S: MoveFlags = MoveFlags::SOUND;
const CP: MoveFlags = MoveFlags::CONTACT.union(MoveFlags::PUNCH);
const CB: MoveFlags = MoveFlags::CONTACT.union(MoveFlags::BITE);

/// `(id, name, type, power, accuracy, pp, priority, flags)`; accuracy 0 never misses
#[rustfmt::skip]
pub(crate) static MOVE_TABLE: [(u16, &str, Type, u16, u8, u8, i8, MoveFlags); 354] = [
    (1, "Pound", Type::Normal, 40, 100, 35, 0, C),
    (2, "Karate Chop", Type::Fighting, 50, 100, 25, 0, C),
    (3, "Double Slap", Type::Normal, 15, 85, 10, 0, C),
    (4, "Comet Punch", Type::Normal, 18, 85, 15, 0, CP),
    (5, "Mega Punch", Type::Normal, 80, 85, 20, 0, C),
    (6, "Pay Day", Type::Normal, 40, 100, 20, 0, NONE),
    (7, "Fire Punch", Type::Fire, 75, 100, 15, 0, CP),
    (8, "Ice Punch", Type::Ice, 75, 100, 15, 0, CP),
    (9, "Thunder Punch", Type::Electric, 75, 100, 15, 0, CP),
    (10, "Scratch", Type::Normal, 40, 100, 35, 0, C),
    (11, "Vice Grip", Type::Normal, 55, 100, 30, 0, C),
    (12, "Guillotine", Type::Normal, 0, 30, 5, 0, C),
    (13, "Razor Wind", Type::Normal, 80, 100, 10, 0, NONE),
    (14, "Swords Dance", Type::Normal, 0, 0, 30, 0, NONE),
    (15, "Cut", Type::Normal, 50, 95, 30, 0, C),
    (16, "Gust", Type::Flying, 40, 100, 35, 0, NONE),
    (17, "Wing Attack", Type::Flying, 60, 100, 35, 0, C),
    (18, "Whirlwind", Type::Normal, 0, 100, 20, -6, NONE),
    (19, "Fly", Type::Flying, 70, 95, 15, 0, C),
    (20, "Bind", Type::Normal, 15, 75, 20, 0, C),
    (21, "Slam", Type::Normal, 80, 75, 20, 0, C),
    (22, "Vine Whip", Type::Grass, 35, 100, 10, 0, C),
    (23, "Stomp", Type::Normal, 65, 100, 20, 0, C),
    (24, "Double Kick", Type::Fighting, 30, 100, 30, 0, C),
    (25, "Mega Kick", Type::Normal, 120, 75, 5, 0, C),
    (26, "Jump Kick", Type::Fighting, 70, 95, 25, 0, C),
    (27, "Rolling Kick", Type::Fighting, 60, 85, 15, 0, C),
    (28, "Sand Attack", Type::Ground, 0, 100, 15, 0, NONE),
    (29, "Headbutt", Type::Normal, 70, 100, 15, 0, C),
    (30, "Horn Attack", Type::Normal, 65, 100, 25, 0, C),
    (31, "Fury Attack", Type::Normal, 15, 85, 20, 0, C),
    (32, "Horn Drill", Type::Normal, 0, 30, 5, 0, C),
    (33, "Tackle", Type::Normal, 35, 95, 35, 0, C),
    (34, "Body Slam", Type::Normal, 85, 100, 15, 0, C),
    (35, "Wrap", Type::Normal, 15, 85, 20, 0, C),
    (36, "Take Down", Type::Normal, 90, 85, 20, 0, C),
    (37, "Thrash", Type::Normal, 90, 100, 20, 0, C),
    (38, "Double-Edge", Type::Normal, 120, 100, 15, 0, C),
    (39, "Tail Whip", Type::Normal, 0, 100, 30, 0, NONE),
    (40, "Poison Sting", Type::Poison, 15, 100, 35, 0, NONE),
    (41, "Twineedle", Type::Bug, 25, 100, 20, 0, NONE),
    (42, "Pin Missile", Type::Bug, 14, 85, 20, 0, NONE),
    (43, "Leer", Type::Normal, 0, 100, 30, 0, NONE),
    (44, "Bite", Type::Dark, 60, 100, 25, 0, CB),
    (45, "Growl", Type::Normal, 0, 100, 40, 0, S),
    (46, "Roar", Type::Normal, 0, 100, 20, -6, S),
    (47, "Sing", Type::Normal, 0, 55, 15, 0, S),
    (48, "Supersonic", Type::Normal, 0, 55, 20, 0, S),
    (49, "Sonic Boom", Type::Normal, 0, 90, 20, 0, NONE),
    (50, "Disable", Type::Normal, 0, 55, 20, 0, NONE),
    (51, "Acid", Type::Poison, 40, 100, 30, 0, NONE),
    (52, "Ember", Type::Fire, 40, 100, 25, 0, NONE),
    (53, "Flamethrower", Type::Fire, 95, 100, 15, 0, NONE),
    (54, "Mist", Type::Ice, 0, 0, 30, 0, NONE),
    (55, "Water Gun", Type::Water, 40, 100, 25, 0, NONE),
    (56, "Hydro Pump", Type::Water, 120, 80, 5, 0, NONE),
    (57, "Surf", Type::Water, 95, 100, 15, 0, NONE),
    (58, "Ice Beam", Type::Ice, 95, 100, 10, 0, NONE),
    (59, "Blizzard", Type::Ice, 120, 70, 5, 0, NONE),
    (60, "Psybeam", Type::Psychic, 65, 100, 20, 0, NONE),
    (61, "Bubble Beam", Type::Water, 65, 100, 20, 0, NONE),
    (62, "Aurora Beam", Type::Ice, 65, 100, 20, 0, NONE),
    (63, "Hyper Beam", Type::Normal, 150, 90, 5, 0, NONE),
    (64, "Peck", Type::Flying, 35, 100, 35, 0, C),
    (65, "Drill Peck", Type::Flying, 80, 100, 20, 0, C),
    (66, "Submission", Type::Fighting, 80, 80, 25, 0, C),
    (67, "Low Kick", Type::Fighting, 0, 100, 20, 0, C),
    (68, "Counter", Type::Fighting, 0, 100, 20, -5, C),
    (69, "Seismic Toss", Type::Fighting, 0, 100, 20, 0, C),
    (70, "Strength", Type::Normal, 80, 100, 15, 0, C),
    (71, "Absorb", Type::Grass, 20, 100, 20, 0, NONE),
    (72, "Mega Drain", Type::Grass, 40, 100, 10, 0, NONE),
    (73, "Leech Seed", Type::Grass, 0, 90, 10, 0, NONE),
    (74, "Growth", Type::Normal, 0, 0, 40, 0, NONE),
    (75, "Razor Leaf", Type::Grass, 55, 95, 25, 0, NONE),
    (76, "Solar Beam", Type::Grass, 120, 100, 10, 0, NONE),
    (77, "Poison Powder", Type::Poison, 0, 75, 35, 0, NONE),
    (78, "Stun Spore", Type::Grass, 0, 75, 30, 0, NONE),
    (79, "Sleep Powder", Type::Grass, 0, 75, 15, 0, NONE),
    (80, "Petal Dance", Type::Grass, 70, 100, 20, 0, C),
    (81, "String Shot", Type::Bug, 0, 95, 40, 0, NONE),
    (82, "Dragon Rage", Type::Dragon, 0, 100, 10, 0, NONE),
    (83, "Fire Spin", Type::Fire, 15, 70, 15, 0, NONE),
    (84, "Thunder Shock", Type::Electric, 40, 100, 30, 0, NONE),
    (85, "Thunderbolt", Type::Electric, 95, 100, 15, 0, NONE),
    (86, "Thunder Wave", Type::Electric, 0, 100, 20, 0, NONE),
    (87, "Thunder", Type::Electric, 120, 70, 10, 0, NONE),
    (88, "Rock Throw", Type::Rock, 50, 90, 15, 0, NONE),
    (89, "Earthquake", Type::Ground, 100, 100, 10, 0, NONE),
    (90, "Fissure", Type::Ground, 0, 30, 5, 0, NONE),
    (91, "Dig", Type::Ground, 60, 100, 10, 0, C),
    (92, "Toxic", Type::Poison, 0, 85, 10, 0, NONE),
    (93, "Confusion", Type::Psychic, 50, 100, 25, 0, NONE),
    (94, "Psychic", Type::Psychic, 90, 100, 10, 0, NONE),
    (95, "Hypnosis", Type::Psychic, 0, 60, 20, 0, NONE),
    (96, "Meditate", Type::Psychic, 0, 0, 40, 0, NONE),
    (97, "Agility", Type::Psychic, 0, 0, 30, 0, NONE),
    (98, "Quick Attack", Type::Normal, 40, 100, 30, 1, C),
    (99, "Rage", Type::Normal, 20, 100, 20, 0, C),
    (100, "Teleport", Type::Psychic, 0, 0, 20, 0, NONE),
    (101, "Night Shade", Type::Ghost, 0, 100, 15, 0, NONE),
    (102, "Mimic", Type::Normal, 0, 100, 10, 0, NONE),
    (103, "Screech", Type::Normal, 0, 85, 40, 0, S),
    (104, "Double Team", Type::Normal, 0, 0, 15, 0, NONE),
    (105, "Recover", Type::Normal, 0, 0, 20, 0, NONE),
    (106, "Harden", Type::Normal, 0, 0, 30, 0, NONE),
    (107, "Minimize", Type::Normal, 0, 0, 20, 0, NONE),
    (108, "Smokescreen", Type::Normal, 0, 100, 20, 0, NONE),
    (109, "Confuse Ray", Type::Ghost, 0, 100, 10, 0, NONE),
    (110, "Withdraw", Type::Water, 0, 0, 40, 0, NONE),
    (111, "Defense Curl", Type::Normal, 0, 0, 40, 0, NONE),
    (112, "Barrier", Type::Psychic, 0, 0, 30, 0, NONE),
    (113, "Light Screen", Type::Psychic, 0, 0, 30, 0, NONE),
    (114, "Haze", Type::Ice, 0, 0, 30, 0, NONE),
    (115, "Reflect", Type::Psychic, 0, 0, 20, 0, NONE),
    (116, "Focus Energy", Type::Normal, 0, 0, 30, 0, NONE),
    (117, "Bide", Type::Normal, 0, 0, 10, 1, C),
    (118, "Metronome", Type::Normal, 0, 0, 10, 0, NONE),
    (119, "Mirror Move", Type::Flying, 0, 0, 20, 0, NONE),
    (120, "Self-Destruct", Type::Normal, 200, 100, 5, 0, NONE),
    (121, "Egg Bomb", Type::Normal, 100, 75, 10, 0, NONE),
    (122, "Lick", Type::Ghost, 20, 100, 30, 0, C),
    (123, "Smog", Type::Poison, 20, 70, 20, 0, NONE),
    (124, "Sludge", Type::Poison, 65, 100, 20, 0, NONE),
    (125, "Bone Club", Type::Ground, 65, 85, 20, 0, NONE),
    (126, "Fire Blast", Type::Fire, 120, 85, 5, 0, NONE),
    (127, "Waterfall", Type::Water, 80, 100, 15, 0, C),
    (128, "Clamp", Type::Water, 35, 75, 10, 0, C),
    (129, "Swift", Type::Normal, 60, 0, 20, 0, NONE),
    (130, "Skull Bash", Type::Normal, 100, 100, 15, 0, C),
    (131, "Spike Cannon", Type::Normal, 20, 100, 15, 0, NONE),
    (132, "Constrict", Type::Normal, 10, 100, 35, 0, C),
    (133, "Amnesia", Type::Psychic, 0, 0, 20, 0, NONE),
    (134, "Kinesis", Type::Psychic, 0, 80, 15, 0, NONE),
    (135, "Soft-Boiled", Type::Normal, 0, 0, 10, 0, NONE),
    (136, "Hi Jump Kick", Type::Fighting, 85, 90, 20, 0, C),
    (137, "Glare", Type::Normal, 0, 75, 30, 0, NONE),
    (138, "Dream Eater", Type::Psychic, 100, 100, 15, 0, NONE),
    (139, "Poison Gas", Type::Poison, 0, 55, 40, 0, NONE),
    (140, "Barrage", Type::Normal, 15, 85, 20, 0, NONE),
    (141, "Leech Life", Type::Bug, 20, 100, 15, 0, C),
    (142, "Lovely Kiss", Type::Normal, 0, 75, 10, 0, NONE),
    (143, "Sky Attack", Type::Flying, 140, 90, 5, 0, NONE),
    (144, "Transform", Type::Normal, 0, 0, 10, 0, NONE),
    (145, "Bubble", Type::Water, 20, 100, 30, 0, NONE),
    (146, "Dizzy Punch", Type::Normal, 70, 100, 10, 0, CP),
    (147, "Spore", Type::Grass, 0, 100, 15, 0, NONE),
    (148, "Flash", Type::Normal, 0, 70, 20, 0, NONE),
    (149, "Psywave", Type::Psychic, 0, 80, 15, 0, NONE),
    (150, "Splash", Type::Normal, 0, 0, 40, 0, NONE),
    (151, "Acid Armor", Type::Poison, 0, 0, 40, 0, NONE),
    (152, "Crabhammer", Type::Water, 90, 85, 10, 0, C),
    (153, "Explosion", Type::Normal, 250, 100, 5, 0, NONE),
    (154, "Fury Swipes", Type::Normal, 18, 80, 15, 0, C),
    (155, "Bonemerang", Type::Ground, 50, 90, 10, 0, NONE),
    (156, "Rest", Type::Psychic, 0, 0, 10, 0, NONE),
    (157, "Rock Slide", Type::Rock, 75, 90, 10, 0, NONE),
    (158, "Hyper Fang", Type::Normal, 80, 90, 15, 0, CB),
    (159, "Sharpen", Type::Normal, 0, 0, 30, 0, NONE),
    (160, "Conversion", Type::Normal, 0, 0, 30, 0, NONE),
    (161, "Tri Attack", Type::Normal, 80, 100, 10, 0, NONE),
    (162, "Super Fang", Type::Normal, 0, 90, 10, 0, C),
    (163, "Slash", Type::Normal, 70, 100, 20, 0, C),
    (164, "Substitute", Type::Normal, 0, 0, 10, 0, NONE),
    (165, "Struggle", Type::Normal, 50, 100, 1, 0, C),
    (166, "Sketch", Type::Normal, 0, 0, 1, 0, NONE),
    (167, "Triple Kick", Type::Fighting, 10, 90, 10, 0, C),
    (168, "Thief", Type::Dark, 40, 100, 10, 0, C),
    (169, "Spider Web", Type::Bug, 0, 0, 10, 0, NONE),
    (170, "Mind Reader", Type::Normal, 0, 100, 5, 0, NONE),
    (171, "Nightmare", Type::Ghost, 0, 100, 15, 0, NONE),
    (172, "Flame Wheel", Type::Fire, 60, 100, 25, 0, C),
    (173, "Snore", Type::Normal, 40, 100, 15, 0, S),
    (174, "Curse", Type::Mystery, 0, 0, 10, 0, NONE),
    (175, "Flail", Type::Normal, 0, 100, 15, 0, C),
    (176, "Conversion 2", Type::Normal, 0, 100, 30, 0, NONE),
    (177, "Aeroblast", Type::Flying, 100, 95, 5, 0, NONE),
    (178, "Cotton Spore", Type::Grass, 0, 85, 40, 0, NONE),
    (179, "Reversal", Type::Fighting, 0, 100, 15, 0, C),
    (180, "Spite", Type::Ghost, 0, 100, 10, 0, NONE),
    (181, "Powder Snow", Type::Ice, 40, 100, 25, 0, NONE),
    (182, "Protect", Type::Normal, 0, 0, 10, 4, NONE),
    (183, "Mach Punch", Type::Fighting, 40, 100, 30, 1, CP),
    (184, "Scary Face", Type::Normal, 0, 90, 10, 0, NONE),
    (185, "Faint Attack", Type::Dark, 60, 0, 20, 0, NONE),
    (186, "Sweet Kiss", Type::Normal, 0, 75, 10, 0, NONE),
    (187, "Belly Drum", Type::Normal, 0, 0, 10, 0, NONE),
    (188, "Sludge Bomb", Type::Poison, 90, 100, 10, 0, NONE),
    (189, "Mud-Slap", Type::Ground, 20, 100, 10, 0, NONE),
    (190, "Octazooka", Type::Water, 65, 85, 10, 0, NONE),
    (191, "Spikes", Type::Ground, 0, 0, 20, 0, NONE),
    (192, "Zap Cannon", Type::Electric, 100, 50, 5, 0, NONE),
    (193, "Foresight", Type::Normal, 0, 100, 40, 0, NONE),
    (194, "Destiny Bond", Type::Ghost, 0, 0, 5, 0, NONE),
    (195, "Perish Song", Type::Normal, 0, 0, 5, 0, S),
    (196, "Icy Wind", Type::Ice, 55, 95, 15, 0, NONE),
    (197, "Detect", Type::Fighting, 0, 0, 5, 4, NONE),
    (198, "Bone Rush", Type::Ground, 25, 80, 10, 0, NONE),
    (199, "Lock-On", Type::Normal, 0, 100, 5, 0, NONE),
    (200, "Outrage", Type::Dragon, 90, 100, 15, 0, C),
    (201, "Sandstorm", Type::Rock, 0, 0, 10, 0, NONE),
    (202, "Giga Drain", Type::Grass, 60, 100, 5, 0, NONE),
    (203, "Endure", Type::Normal, 0, 0, 10, 4, NONE),
    (204, "Charm", Type::Normal, 0, 100, 20, 0, NONE),
    (205, "Rollout", Type::Rock, 30, 90, 20, 0, C),
    (206, "False Swipe", Type::Normal, 40, 100, 40, 0, C),
    (207, "Swagger", Type::Normal, 0, 90, 15, 0, NONE),
    (208, "Milk Drink", Type::Normal, 0, 0, 10, 0, NONE),
    (209, "Spark", Type::Electric, 65, 100, 20, 0, C),
    (210, "Fury Cutter", Type::Bug, 10, 95, 20, 0, C),
    (211, "Steel Wing", Type::Steel, 70, 90, 25, 0, C),
    (212, "Mean Look", Type::Normal, 0, 100, 5, 0, NONE),
    (213, "Attract", Type::Normal, 0, 100, 15, 0, NONE),
    (214, "Sleep Talk", Type::Normal, 0, 0, 10, 0, NONE),
    (215, "Heal Bell", Type::Normal, 0, 0, 5, 0, S),
    (216, "Return", Type::Normal, 0, 100, 20, 0, C),
    (217, "Present", Type::Normal, 0, 90, 15, 0, NONE),
    (218, "Frustration", Type::Normal, 0, 100, 20, 0, C),
    (219, "Safeguard", Type::Normal, 0, 0, 25, 0, NONE),
    (220, "Pain Split", Type::Normal, 0, 100, 20, 0, NONE),
    (221, "Sacred Fire", Type::Fire, 100, 95, 5, 0, NONE),
    (222, "Magnitude", Type::Ground, 0, 100, 30, 0, NONE),
    (223, "Dynamic Punch", Type::Fighting, 100, 50, 5, 0, CP),
    (224, "Megahorn", Type::Bug, 120, 85, 10, 0, C),
    (225, "Dragon Breath", Type::Dragon, 60, 100, 20, 0, NONE),
    (226, "Baton Pass", Type::Normal, 0, 0, 40, 0, NONE),
    (227, "Encore", Type::Normal, 0, 100, 5, 0, NONE),
    (228, "Pursuit", Type::Dark, 40, 100, 20, 0, C),
    (229, "Rapid Spin", Type::Normal, 20, 100, 40, 0, C),
    (230, "Sweet Scent", Type::Normal, 0, 100, 20, 0, NONE),
    (231, "Iron Tail", Type::Steel, 100, 75, 15, 0, C),
    (232, "Metal Claw", Type::Steel, 50, 95, 35, 0, C),
    (233, "Vital Throw", Type::Fighting, 70, 0, 10, -1, C),
    (234, "Morning Sun", Type::Normal, 0, 0, 5, 0, NONE),
    (235, "Synthesis", Type::Grass, 0, 0, 5, 0, NONE),
    (236, "Moonlight", Type::Normal, 0, 0, 5, 0, NONE),
    (237, "Hidden Power", Type::Normal, 0, 100, 15, 0, NONE),
    (238, "Cross Chop", Type::Fighting, 100, 80, 5, 0, C),
    (239, "Twister", Type::Dragon, 40, 100, 20, 0, NONE),
    (240, "Rain Dance", Type::Water, 0, 0, 5, 0, NONE),
    (241, "Sunny Day", Type::Fire, 0, 0, 5, 0, NONE),
    (242, "Crunch", Type::Dark, 80, 100, 15, 0, CB),
    (243, "Mirror Coat", Type::Psychic, 0, 100, 20, -5, NONE),
    (244, "Psych Up", Type::Normal, 0, 0, 10, 0, NONE),
    (245, "Extreme Speed", Type::Normal, 80, 100, 5, 2, C),
    (246, "Ancient Power", Type::Rock, 60, 100, 5, 0, NONE),
    (247, "Shadow Ball", Type::Ghost, 80, 100, 15, 0, NONE),
    (248, "Future Sight", Type::Psychic, 80, 90, 15, 0, NONE),
    (249, "Rock Smash", Type::Fighting, 20, 100, 15, 0, C),
    (250, "Whirlpool", Type::Water, 15, 70, 15, 0, NONE),
    (251, "Beat Up", Type::Dark, 10, 100, 10, 0, NONE),
    (252, "Fake Out", Type::Normal, 40, 100, 10, 3, C),
    (253, "Uproar", Type::Normal, 50, 100, 10, 0, S),
    (254, "Stockpile", Type::Normal, 0, 0, 20, 0, NONE),
    (255, "Spit Up", Type::Normal, 0, 100, 10, 0, NONE),
    (256, "Swallow", Type::Normal, 0, 0, 10, 0, NONE),
    (257, "Heat Wave", Type::Fire, 100, 90, 10, 0, NONE),
    (258, "Hail", Type::Ice, 0, 0, 10, 0, NONE),
    (259, "Torment", Type::Dark, 0, 100, 15, 0, NONE),
    (260, "Flatter", Type::Dark, 0, 100, 15, 0, NONE),
    (261, "Will-O-Wisp", Type::Fire, 0, 75, 15, 0, NONE),
    (262, "Memento", Type::Dark, 0, 100, 10, 0, NONE),
    (263, "Facade", Type::Normal, 70, 100, 20, 0, C),
    (264, "Focus Punch", Type::Fighting, 150, 100, 20, -3, CP),
    (265, "Smelling Salts", Type::Normal, 60, 100, 10, 0, C),
    (266, "Follow Me", Type::Normal, 0, 0, 20, 3, NONE),
    (267, "Nature Power", Type::Normal, 0, 0, 20, 0, NONE),
    (268, "Charge", Type::Electric, 0, 0, 20, 0, NONE),
    (269, "Taunt", Type::Dark, 0, 100, 20, 0, NONE),
    (270, "Helping Hand", Type::Normal, 0, 0, 20, 5, NONE),
    (271, "Trick", Type::Psychic, 0, 100, 10, 0, NONE),
    (272, "Role Play", Type::Psychic, 0, 0, 10, 0, NONE),
    (273, "Wish", Type::Normal, 0, 0, 10, 0, NONE),
    (274, "Assist", Type::Normal, 0, 0, 20, 0, NONE),
    (275, "Ingrain", Type::Grass, 0, 0, 20, 0, NONE),
    (276, "Superpower", Type::Fighting, 120, 100, 5, 0, C),
    (277, "Magic Coat", Type::Psychic, 0, 0, 15, 4, NONE),
    (278, "Recycle", Type::Normal, 0, 0, 10, 0, NONE),
    (279, "Revenge", Type::Fighting, 60, 100, 10, -4, C),
    (280, "Brick Break", Type::Fighting, 75, 100, 15, 0, C),
    (281, "Yawn", Type::Normal, 0, 0, 10, 0, NONE),
    (282, "Knock Off", Type::Dark, 20, 100, 20, 0, C),
    (283, "Endeavor", Type::Normal, 0, 100, 5, 0, C),
    (284, "Eruption", Type::Fire, 150, 100, 5, 0, NONE),
    (285, "Skill Swap", Type::Psychic, 0, 0, 10, 0, NONE),
    (286, "Imprison", Type::Psychic, 0, 0, 10, 0, NONE),
    (287, "Refresh", Type::Normal, 0, 0, 20, 0, NONE),
    (288, "Grudge", Type::Ghost, 0, 0, 10, 0, NONE),
    (289, "Snatch", Type::Dark, 0, 0, 10, 4, NONE),
    (290, "Secret Power", Type::Normal, 70, 100, 20, 0, NONE),
    (291, "Dive", Type::Water, 60, 100, 10, 0, C),
    (292, "Arm Thrust", Type::Fighting, 15, 100, 20, 0, C),
    (293, "Camouflage", Type::Normal, 0, 0, 20, 0, NONE),
    (294, "Tail Glow", Type::Bug, 0, 0, 20, 0, NONE),
    (295, "Luster Purge", Type::Psychic, 70, 100, 5, 0, NONE),
    (296, "Mist Ball", Type::Psychic, 70, 100, 5, 0, NONE),
    (297, "Feather Dance", Type::Flying, 0, 100, 15, 0, NONE),
    (298, "Teeter Dance", Type::Normal, 0, 100, 20, 0, NONE),
    (299, "Blaze Kick", Type::Fire, 85, 90, 10, 0, C),
    (300, "Mud Sport", Type::Ground, 0, 0, 15, 0, NONE),
    (301, "Ice Ball", Type::Ice, 30, 90, 20, 0, C),
    (302, "Needle Arm", Type::Grass, 60, 100, 15, 0, C),
    (303, "Slack Off", Type::Normal, 0, 0, 10, 0, NONE),
    (304, "Hyper Voice", Type::Normal, 90, 100, 10, 0, S),
    (305, "Poison Fang", Type::Poison, 50, 100, 15, 0, CB),
    (306, "Crush Claw", Type::Normal, 75, 95, 10, 0, C),
    (307, "Blast Burn", Type::Fire, 150, 90, 5, 0, NONE),
    (308, "Hydro Cannon", Type::Water, 150, 90, 5, 0, NONE),
    (309, "Meteor Mash", Type::Steel, 100, 85, 10, 0, CP),
    (310, "Astonish", Type::Ghost, 30, 100, 15, 0, C),
    (311, "Weather Ball", Type::Normal, 50, 100, 10, 0, NONE),
    (312, "Aromatherapy", Type::Grass, 0, 0, 5, 0, NONE),
    (313, "Fake Tears", Type::Dark, 0, 100, 20, 0, NONE),
    (314, "Air Cutter", Type::Flying, 55, 95, 25, 0, NONE),
    (315, "Overheat", Type::Fire, 140, 90, 5, 0, NONE),
    (316, "Odor Sleuth", Type::Normal, 0, 0, 40, 0, NONE),
    (317, "Rock Tomb", Type::Rock, 50, 80, 10, 0, NONE),
    (318, "Silver Wind", Type::Bug, 60, 100, 5, 0, NONE),
    (319, "Metal Sound", Type::Steel, 0, 85, 40, 0, S),
    (320, "Grass Whistle", Type::Grass, 0, 55, 15, 0, S),
    (321, "Tickle", Type::Normal, 0, 100, 20, 0, NONE),
    (322, "Cosmic Power", Type::Psychic, 0, 0, 20, 0, NONE),
    (323, "Water Spout", Type::Water, 150, 100, 5, 0, NONE),
    (324, "Signal Beam", Type::Bug, 75, 100, 15, 0, NONE),
    (325, "Shadow Punch", Type::Ghost, 60, 0, 20, 0, CP),
    (326, "Extrasensory", Type::Psychic, 80, 100, 30, 0, NONE),
    (327, "Sky Uppercut", Type::Fighting, 85, 90, 15, 0, CP),
    (328, "Sand Tomb", Type::Ground, 15, 70, 15, 0, NONE),
    (329, "Sheer Cold", Type::Ice, 0, 30, 5, 0, NONE),
    (330, "Muddy Water", Type::Water, 95, 85, 10, 0, NONE),
    (331, "Bullet Seed", Type::Grass, 10, 100, 30, 0, NONE),
    (332, "Aerial Ace", Type::Flying, 60, 0, 20, 0, C),
    (333, "Icicle Spear", Type::Ice, 10, 100, 30, 0, NONE),
    (334, "Iron Defense", Type::Steel, 0, 0, 15, 0, NONE),
    (335, "Block", Type::Normal, 0, 0, 5, 0, NONE),
    (336, "Howl", Type::Normal, 0, 0, 40, 0, S),
    (337, "Dragon Claw", Type::Dragon, 80, 100, 15, 0, C),
    (338, "Frenzy Plant", Type::Grass, 150, 90, 5, 0, NONE),
    (339, "Bulk Up", Type::Fighting, 0, 0, 20, 0, NONE),
    (340, "Bounce", Type::Flying, 85, 85, 5, 0, C),
    (341, "Mud Shot", Type::Ground, 55, 95, 15, 0, NONE),
    (342, "Poison Tail", Type::Poison, 50, 100, 25, 0, C),
    (343, "Covet", Type::Normal, 40, 100, 40, 0, C),
    (344, "Volt Tackle", Type::Electric, 120, 100, 15, 0, C),
    (345, "Magical Leaf", Type::Grass, 60, 0, 20, 0, NONE),
    (346, "Water Sport", Type::Water, 0, 0, 15, 0, NONE),
    (347, "Calm Mind", Type::Psychic, 0, 0, 20, 0, NONE),
    (348, "Leaf Blade", Type::Grass, 70, 100, 15, 0, C),
    (349, "Dragon Dance", Type::Dragon, 0, 0, 20, 0, NONE),
    (350, "Rock Blast", Type::Rock, 25, 80, 10, 0, NONE),
    (351, "Shock Wave", Type::Electric, 60, 0, 20, 0, NONE),
    (352, "Water Pulse", Type::Water, 60, 100, 20, 0, NONE),
    (353, "Doom Desire", Type::Steel, 120, 85, 5, 0, NONE),
    (354, "Psycho Boost", Type::Psychic, 140, 90, 5, 0, NONE),
];
