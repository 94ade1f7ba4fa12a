//! Default word lists for the lexicon analyzer.
//!
//! General-purpose English vocabulary tuned for personal writing rather than
//! any particular domain.

/// Positive words and their polarity
pub(super) const POSITIVE: &[(&str, f64)] = &[
    // Strongly positive
    ("amazing", 0.9),
    ("awesome", 0.9),
    ("excellent", 0.9),
    ("fantastic", 0.9),
    ("wonderful", 0.9),
    ("perfect", 0.9),
    ("superb", 0.9),
    ("outstanding", 0.9),
    ("magnificent", 0.9),
    ("fabulous", 0.9),
    ("overjoyed", 0.9),
    ("ecstatic", 0.9),
    ("brilliant", 0.85),
    ("thrilled", 0.85),
    ("incredible", 0.85),
    ("marvelous", 0.85),
    ("spectacular", 0.85),
    ("elated", 0.85),
    ("euphoric", 0.85),
    ("blissful", 0.85),
    ("delighted", 0.8),
    ("delightful", 0.8),
    ("love", 0.8),
    ("loved", 0.8),
    ("loves", 0.8),
    ("adore", 0.8),
    ("adored", 0.8),
    ("best", 0.8),
    ("greatest", 0.8),
    ("beautiful", 0.8),
    ("gorgeous", 0.8),
    ("stunning", 0.8),
    ("terrific", 0.8),
    ("splendid", 0.8),
    ("glorious", 0.8),
    ("joy", 0.8),
    ("joyful", 0.8),
    ("joyous", 0.8),
    ("bliss", 0.8),
    ("happiness", 0.8),
    ("happiest", 0.8),
    ("wonderfully", 0.8),
    // Moderately positive
    ("happy", 0.6),
    ("happier", 0.6),
    ("happily", 0.6),
    ("glad", 0.6),
    ("great", 0.6),
    ("good", 0.5),
    ("nice", 0.5),
    ("nicer", 0.5),
    ("nicest", 0.7),
    ("finest", 0.7),
    ("lovely", 0.6),
    ("loving", 0.7),
    ("beloved", 0.7),
    ("blessed", 0.7),
    ("triumph", 0.7),
    ("triumphant", 0.7),
    ("victory", 0.7),
    ("thrilling", 0.7),
    ("inspiring", 0.7),
    ("amazed", 0.7),
    ("beautifully", 0.7),
    ("delicious", 0.7),
    ("fun", 0.5),
    ("funny", 0.4),
    ("hilarious", 0.6),
    ("amusing", 0.5),
    ("entertaining", 0.5),
    ("enjoy", 0.5),
    ("enjoyed", 0.5),
    ("enjoying", 0.5),
    ("enjoyable", 0.6),
    ("pleasant", 0.6),
    ("pleasantly", 0.5),
    ("pleasure", 0.6),
    ("excited", 0.6),
    ("exciting", 0.6),
    ("enthusiastic", 0.6),
    ("proud", 0.6),
    ("pride", 0.5),
    ("proudly", 0.5),
    ("grateful", 0.6),
    ("gratitude", 0.6),
    ("thankful", 0.6),
    ("appreciated", 0.6),
    ("appreciate", 0.5),
    ("hopeful", 0.5),
    ("optimistic", 0.5),
    ("pleased", 0.5),
    ("cheerful", 0.6),
    ("cheer", 0.5),
    ("cheered", 0.5),
    ("success", 0.6),
    ("successful", 0.6),
    ("succeeded", 0.6),
    ("succeed", 0.5),
    ("accomplished", 0.6),
    ("achievement", 0.6),
    ("achieved", 0.5),
    ("win", 0.5),
    ("won", 0.5),
    ("winning", 0.5),
    ("celebrate", 0.6),
    ("celebrated", 0.6),
    ("celebration", 0.6),
    ("fortunate", 0.6),
    ("lucky", 0.6),
    ("impressed", 0.6),
    ("impressive", 0.6),
    ("remarkable", 0.6),
    ("memorable", 0.6),
    ("fulfilled", 0.6),
    ("fulfilling", 0.6),
    ("rewarding", 0.6),
    ("thriving", 0.6),
    ("generous", 0.6),
    ("kindness", 0.6),
    ("charming", 0.6),
    ("laughter", 0.6),
    ("yay", 0.6),
    ("inspired", 0.6),
    ("perfectly", 0.6),
    ("like", 0.3),
    ("liked", 0.4),
    ("smile", 0.5),
    ("smiled", 0.5),
    ("smiles", 0.5),
    ("smiling", 0.5),
    ("laugh", 0.5),
    ("laughed", 0.5),
    ("laughing", 0.5),
    ("tasty", 0.5),
    ("satisfied", 0.5),
    ("satisfying", 0.5),
    ("contented", 0.5),
    ("relaxing", 0.5),
    ("refreshed", 0.5),
    ("refreshing", 0.5),
    ("comforting", 0.5),
    ("confident", 0.5),
    ("motivated", 0.5),
    ("energized", 0.5),
    ("energetic", 0.5),
    ("relief", 0.5),
    ("relieved", 0.5),
    ("serene", 0.5),
    ("tranquil", 0.5),
    ("peace", 0.5),
    ("harmony", 0.5),
    ("friendly", 0.5),
    ("helpful", 0.5),
    ("supportive", 0.5),
    ("sweet", 0.5),
    ("cute", 0.5),
    ("favorite", 0.5),
    ("favourite", 0.5),
    ("encouraging", 0.5),
    ("encouraged", 0.5),
    ("meaningful", 0.5),
    ("worthwhile", 0.5),
    ("glowing", 0.5),
    ("positive", 0.5),
    // Mildly positive
    ("content", 0.4),
    ("calm", 0.3),
    ("calming", 0.4),
    ("relaxed", 0.4),
    ("peaceful", 0.4),
    ("cozy", 0.4),
    ("comfortable", 0.4),
    ("better", 0.4),
    ("improved", 0.4),
    ("improving", 0.4),
    ("progress", 0.4),
    ("recovered", 0.4),
    ("healthy", 0.4),
    ("productive", 0.4),
    ("interesting", 0.4),
    ("valuable", 0.4),
    ("eager", 0.4),
    ("playful", 0.4),
    ("smart", 0.4),
    ("clever", 0.4),
    ("thanks", 0.4),
    ("thank", 0.4),
    ("wow", 0.4),
    ("rested", 0.3),
    ("hope", 0.3),
    ("hoping", 0.3),
    ("safe", 0.3),
    ("secure", 0.3),
    ("easy", 0.3),
    ("easier", 0.3),
    ("smooth", 0.3),
    ("smoothly", 0.3),
    ("sunny", 0.3),
    ("warm", 0.3),
    ("fresh", 0.3),
    ("bright", 0.3),
    ("fine", 0.2),
    ("okay", 0.1),
    ("ok", 0.1),
];

/// Negative words and their polarity
pub(super) const NEGATIVE: &[(&str, f64)] = &[
    // Strongly negative
    ("terrible", -0.9),
    ("awful", -0.9),
    ("horrible", -0.9),
    ("miserable", -0.9),
    ("worst", -0.9),
    ("devastated", -0.9),
    ("heartbroken", -0.9),
    ("atrocious", -0.9),
    ("abysmal", -0.9),
    ("hate", -0.8),
    ("hated", -0.8),
    ("hates", -0.8),
    ("hateful", -0.8),
    ("loathe", -0.8),
    ("despise", -0.8),
    ("furious", -0.8),
    ("rage", -0.8),
    ("depressed", -0.8),
    ("hopeless", -0.8),
    ("worthless", -0.8),
    ("disgusting", -0.8),
    ("disaster", -0.8),
    ("disastrous", -0.8),
    ("catastrophe", -0.8),
    ("tragic", -0.8),
    ("tragedy", -0.8),
    ("dreadful", -0.8),
    ("appalling", -0.8),
    ("nightmare", -0.8),
    ("grief", -0.8),
    ("despair", -0.8),
    ("agony", -0.8),
    ("betrayed", -0.8),
    ("terrified", -0.8),
    ("horrified", -0.8),
    ("cruel", -0.8),
    // Moderately negative
    ("sad", -0.5),
    ("sadder", -0.5),
    ("saddest", -0.7),
    ("sadness", -0.6),
    ("sadly", -0.5),
    ("bad", -0.6),
    ("angry", -0.6),
    ("anger", -0.6),
    ("mad", -0.5),
    ("upset", -0.6),
    ("upsetting", -0.6),
    ("unhappy", -0.6),
    ("lonely", -0.6),
    ("anxious", -0.5),
    ("afraid", -0.5),
    ("scared", -0.5),
    ("frightened", -0.7),
    ("fear", -0.6),
    ("feared", -0.5),
    ("fearful", -0.6),
    ("panic", -0.6),
    ("panicked", -0.6),
    ("dread", -0.6),
    ("worried", -0.5),
    ("worrying", -0.5),
    ("stressed", -0.5),
    ("stressful", -0.6),
    ("frustrated", -0.6),
    ("frustrating", -0.6),
    ("frustration", -0.6),
    ("disappointed", -0.6),
    ("disappointing", -0.6),
    ("disappointment", -0.6),
    ("hurt", -0.6),
    ("hurting", -0.6),
    ("hurtful", -0.6),
    ("painful", -0.7),
    ("pain", -0.6),
    ("cry", -0.5),
    ("cried", -0.5),
    ("crying", -0.5),
    ("sick", -0.5),
    ("ill", -0.5),
    ("unwell", -0.5),
    ("injured", -0.6),
    ("fail", -0.6),
    ("failed", -0.6),
    ("failure", -0.6),
    ("failing", -0.5),
    ("wrong", -0.5),
    ("ruined", -0.7),
    ("ruin", -0.6),
    ("sorrow", -0.7),
    ("grieving", -0.7),
    ("suffering", -0.7),
    ("suffer", -0.6),
    ("miserably", -0.7),
    ("depressing", -0.7),
    ("depression", -0.7),
    ("humiliated", -0.7),
    ("disgusted", -0.7),
    ("nasty", -0.7),
    ("pathetic", -0.7),
    ("died", -0.7),
    ("death", -0.7),
    ("nightmares", -0.7),
    ("dead", -0.6),
    ("loss", -0.6),
    ("regret", -0.6),
    ("regretted", -0.6),
    ("ashamed", -0.6),
    ("rejected", -0.6),
    ("helpless", -0.6),
    ("useless", -0.6),
    ("broken", -0.6),
    ("gross", -0.6),
    ("ugly", -0.6),
    ("rude", -0.6),
    ("hostile", -0.6),
    ("resent", -0.6),
    ("resentful", -0.6),
    ("stupid", -0.6),
    ("sucks", -0.6),
    ("sucked", -0.6),
    ("dismal", -0.6),
    ("unpleasant", -0.6),
    ("disturbing", -0.6),
    ("horribly", -0.6),
    ("unfortunate", -0.5),
    ("unlucky", -0.5),
    ("guilty", -0.5),
    ("embarrassed", -0.5),
    ("embarrassing", -0.5),
    ("isolated", -0.5),
    ("irritated", -0.5),
    ("irritating", -0.5),
    ("exhausted", -0.5),
    ("exhausting", -0.5),
    ("drained", -0.5),
    ("overwhelmed", -0.5),
    ("struggling", -0.5),
    ("pointless", -0.5),
    ("gloomy", -0.5),
    ("bleak", -0.5),
    ("grim", -0.5),
    ("bitter", -0.5),
    ("troubled", -0.5),
    ("yelled", -0.5),
    ("terribly", -0.5),
    ("insomnia", -0.5),
    // Mildly negative
    ("lost", -0.4),
    ("unfortunately", -0.4),
    ("tears", -0.4),
    ("ignored", -0.4),
    ("worry", -0.4),
    ("tense", -0.4),
    ("uneasy", -0.4),
    ("insecure", -0.4),
    ("broke", -0.4),
    ("ache", -0.4),
    ("aching", -0.4),
    ("poor", -0.4),
    ("poorly", -0.4),
    ("tedious", -0.4),
    ("uncomfortable", -0.4),
    ("mistake", -0.4),
    ("mistakes", -0.4),
    ("trouble", -0.4),
    ("struggle", -0.4),
    ("struggled", -0.4),
    ("conflict", -0.4),
    ("argument", -0.4),
    ("argued", -0.4),
    ("fight", -0.4),
    ("fought", -0.4),
    ("jealous", -0.4),
    ("ridiculous", -0.4),
    ("sleepless", -0.4),
    ("bored", -0.3),
    ("boring", -0.4),
    ("annoyed", -0.4),
    ("annoying", -0.4),
    ("worse", -0.4),
    ("worsened", -0.5),
    ("tired", -0.3),
    ("difficult", -0.3),
    ("nervous", -0.3),
    ("alone", -0.3),
    ("restless", -0.3),
    ("confused", -0.3),
    ("confusing", -0.3),
    ("mediocre", -0.3),
    ("dull", -0.3),
    ("sorry", -0.3),
    ("overwhelming", -0.3),
    ("problem", -0.3),
    ("problems", -0.3),
    ("missed", -0.3),
    ("cancelled", -0.3),
    ("canceled", -0.3),
    ("hard", -0.2),
    ("meh", -0.2),
];

/// Words that flip the polarity of the next scored word
pub(super) const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "nothing", "none", "nobody", "cannot", "cant",
    "can't", "don't", "dont", "doesn't", "doesnt", "didn't", "didnt", "isn't", "isnt", "aren't",
    "arent", "wasn't", "wasnt", "weren't", "werent", "won't", "wont", "wouldn't", "wouldnt",
    "shouldn't", "shouldnt", "couldn't", "couldnt", "hardly", "barely",
];

/// Words that scale the polarity of the next scored word
pub(super) const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.2),
    ("extremely", 1.6),
    ("incredibly", 1.6),
    ("totally", 1.4),
    ("absolutely", 1.5),
    ("super", 1.4),
    ("quite", 1.1),
    ("slightly", 0.5),
    ("somewhat", 0.7),
    ("little", 0.6),
    ("bit", 0.6),
];

/// Function words a pending negation or intensifier carries across
pub(super) const FILLERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "my", "your", "his", "her", "its", "our",
    "their", "such", "be", "been", "being", "feel", "feeling", "felt",
];
