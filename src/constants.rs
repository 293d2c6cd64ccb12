pub const DISCORD_API_BASE: &str = "https://discord.com/api/v10";
pub const GIANTBOMB_API_BASE: &str = "https://www.giantbomb.com/api";
pub const HUGGINGFACE_API_URL: &str = "https://api-inference.huggingface.co/models/gpt2";

pub const USER_AGENT: &str = "GayChallengeBot";
pub const BOT_USERNAME: &str = "Gay Challenge Bot";

pub const DEFAULT_CATEGORIES: &str = "car,character,game_character,crossover";

pub const ROTATION_FILE: &str = "rotation_index.txt";
pub const LAST_MESSAGE_FILE: &str = "last_message_id.txt";
pub const HISTORY_FILE: &str = "history.json";

pub const RECENCY_WINDOW_DAYS: i64 = 30;

/// Page size for reaction-user and message-window reads.
pub const FETCH_LIMIT: u32 = 100;

pub const CHALLENGE_HEADER: &str = "🌈 **Gayest Comment Challenge!** 🌈";
pub const CHALLENGE_FOOTER: &str = "🗳️ **Vote for the best response!** React with 🏳️‍🌈 or 💀.";

pub const GAYEST_EMOJI: &str = "🏳️‍🌈";
pub const FUNNIEST_EMOJI: &str = "💀";

/// Tallied emoji and the title its winner gets in the announcement.
pub const VOTE_EMOJIS: [(&str, &str); 2] = [
    (GAYEST_EMOJI, "Gayest response"),
    (FUNNIEST_EMOJI, "Funniest response"),
];

pub const MIDNIGHT_CLUB_CARS: [&str; 31] = [
    "Big Red DUB Escalade",
    "Black DUB EXT",
    "DUB Chrysler 300C",
    "DUB Dodge Magnum",
    "DUB Mercedes-Benz SL55 AMG",
    "68 Pontiac GTO",
    "DUB 96 Chevy Impala SS",
    "Hummer H1",
    "Lamborghini Murciélago",
    "Nissan Skyline GT-R R34",
    "Toyota Supra MK4",
    "69 Plymouth Netcoder",
    "2005 Ford Mustang GT",
    "Pagani Zonda C12",
    "81 Chevrolet Camaro Z28",
    "Mitsubishi 3000GT VR-4",
    "Saleen S7 Twin Turbo",
    "Audi RS4",
    "DUB Dodge Charger SRT8",
    "Chrysler ME Four Twelve",
    "Volkswagen Golf R32",
    "Mitsubishi Lancer Evo VIII",
    "Saiku XS",
    "Bryston V",
    "Scneller V8",
    "Cocotte",
    "Veloci",
    "Emu",
    "71 Bestia",
    "Smugglers Run Buggie",
    "SLF",
];

pub const MIDNIGHT_CLUB_CHARACTERS: [&str; 40] = [
    "Oscar",
    "Angel",
    "Apone",
    "Moses",
    "Savo",
    "Tomoya",
    "Vince",
    "Dice",
    "Gina",
    "Vito",
    "Andrew",
    "Phil",
    "Vanessa",
    "Brooke",
    "Lamont",
    "Carlos",
    "Bishop",
    "Kioshi",
    "Caesar",
    "Angel",
    "Leo",
    "Trust Fund Baby From MC2",
    "Hector",
    "The City Champs",
    "Andrew",
    "Roy",
    "Annie",
    "Fernando",
    "Karol",
    "Doc",
    "Baby-T",
    "Yo-Yo",
    "Nails",
    "Arnie",
    "Rachel",
    "Sara",
    "Kayla",
    "Walker",
    "AJ",
    "Lester",
];

pub const CAR_TEMPLATES: [&str; 3] = [
    "How would `{}` be modified in the gayest way possible?",
    "What if `{}` had a fabulous pride-themed paint job?",
    "If `{}` could talk, what super gay thing would it say?",
];

pub const CHARACTER_TEMPLATES: [&str; 3] = [
    "Describe `{}` in the gayest way possible.",
    "If `{}` was in a pride parade, what would they wear?",
    "Speedrun `{}`. What’s the fastest way to make it sound dirty?",
];

pub const GAME_CHARACTER_TEMPLATES: [&str; 3] = [
    "What if `{}` was a drag queen, what would their stage name be?",
    "Describe `{}` as if they were the lead in a gay romance movie.",
    "If `{}` had to survive using only sass, how would they win?",
];

pub const CROSSOVER_TEMPLATES: [&str; 3] = [
    "`{}` and `{}` are stuck in the same pride float. Who flirts first?",
    "Write the opening line of a romance novel starring `{}` and `{}`.",
    "`{}` challenges `{}` to a street race. What's the loser's punishment?",
];
