//! Built-in phrase tables.
//!
//! Entries are `(corporate, honest)` pairs. A `None` side means the entry only
//! translates in one direction.

pub type RawPhrase = (Option<&'static str>, Option<&'static str>);

pub const PHRASES: &[RawPhrase] = &[
    // Corporate classics
    (Some("Let's circle back"), Some("I wasn't listening and need time to Google this")),
    (Some("Think outside the box"), Some("Fix this impossible problem with no resources")),
    (Some("Wear many hats"), Some("Do 5 jobs for the price of 0.8")),
    (Some("Touch base"), Some("Interrupt your actual work")),
    (Some("Low-hanging fruit"), Some("The easy stuff we should have done months ago")),
    (Some("Move the needle"), Some("Show me numbers so I can take credit")),
    (Some("Synergize"), Some("Make this someone else's problem")),
    (Some("Circle back offline"), Some("Let's pretend this meeting never happened")),
    (Some("Streamline processes"), Some("Fire people and make others work harder")),
    (Some("Leverage our core competencies"), Some("Do what we've always done but sound fancy")),
    // Honest phrases and their corporate disguise
    (Some("I'd love to explore alternative approaches"), Some("This is stupid")),
    (Some("I see an opportunity for skill development"), Some("You're incompetent")),
    (Some("Let's workshop some creative solutions"), Some("That won't work")),
    (Some("Let me circle back with stakeholders"), Some("I don't know")),
    (Some("Perhaps we could optimize our bandwidth allocation"), Some("You're wasting time")),
    (Some("This presents some interesting challenges"), Some("This is impossible")),
    (Some("I have a different perspective on this"), Some("You're wrong")),
    (Some("I'm passionate about exploring new opportunities"), Some("I hate this job")),
    (Some("Let's ensure we're maximizing our collaborative time"), Some("This meeting is pointless")),
    (Some("I'd appreciate additional context on that data point"), Some("You're lying")),
    (Some("Could you help me understand the strategic rationale?"), Some("I'm confused")),
    (Some("I see an opportunity for process improvement"), Some("This is broken")),
    (Some("We should validate stakeholder engagement levels"), Some("Nobody cares")),
    (Some("I want to respect everyone's time commitments"), Some("You're late")),
    (Some("I'd love to explore more dynamic approaches"), Some("This is boring")),
    (Some("Let's identify learnings from this experience"), Some("You messed up")),
    (Some("Let me assess the resource allocation for that initiative"), Some("I'm not doing that")),
    (Some("We should evaluate the ROI on this investment"), Some("This is a waste of money")),
    (Some("I appreciate your enthusiasm and attention to detail"), Some("You're annoying")),
    (Some("Let me prioritize that in my action items"), Some("I forgot")),
    // More jargon
    (Some("Best practice"), Some("The only way we know how to do it")),
    (Some("Ideate"), Some("Think of ideas we'll never implement")),
    (Some("At the end of the day"), Some("When I run out of buzzwords")),
    (Some("Game changer"), Some("This week's overhyped initiative")),
    (Some("Take it to the next level"), Some("Make it more complicated")),
    (Some("Drill down"), Some("Ask you to do the work I should do")),
    (Some("Reach out"), Some("Bother someone via email")),
    (Some("Value-add"), Some("Justify my existence")),
    (Some("Deep dive"), Some("Pretend to analyze something thoroughly")),
    (Some("Paradigm shift"), Some("We're changing direction again")),
    (Some("Deliverables"), Some("Stuff you need to finish")),
    (Some("Bandwidth"), Some("Time you don't actually have")),
    (Some("Stakeholder"), Some("Person who can ruin your project")),
    (Some("Action items"), Some("Your weekend plans")),
    (Some("Table this"), Some("Forget about it forever")),
    (Some("Push the envelope"), Some("Break things and blame others")),
    (Some("Win-win"), Some("I win, you think you win")),
    (Some("Scalable solution"), Some("We'll worry about it breaking later")),
    (Some("Innovation"), Some("Copying what competitors did last year")),
    (Some("Digital transformation"), Some("Expensive consultants telling us to use computers")),
    (Some("Agile methodology"), Some("Changing requirements every five minutes")),
    (Some("Growth hacking"), Some("Spamming people creatively")),
    (Some("Disruptive"), Some("Annoying")),
    (Some("Pivot"), Some("Admit our original idea was terrible")),
    (Some("Optimize"), Some("Make worse in the name of efficiency")),
    (Some("Strategic alignment"), Some("Make everyone pretend to agree")),
    (Some("Market penetration"), Some("Bothering potential customers aggressively")),
    (Some("Customer journey"), Some("The maze we make people navigate")),
    (Some("Thought leadership"), Some("Posting obvious insights on LinkedIn")),
];

/// Whole-input overrides, checked before any sentence-level work.
pub const EASTER_EGGS: &[RawPhrase] = &[
    (Some("Corporate Buzzword Translator 3000"), Some("The hero we need but don't deserve")),
    (Some("AI"), Some("Autocomplete with delusions of grandeur")),
    (Some("Machine Learning"), Some("Statistics with a marketing budget")),
    (Some("Blockchain"), Some("A very slow database with trust issues")),
    (Some("The Cloud"), Some("Someone else's computer")),
    (Some("Big Data"), Some("Regular data with an ego problem")),
    (Some("Growth Hacker"), Some("Marketer who learned to code 'Hello World'")),
    (Some("Ninja"), Some("Person who disappears when you need them most")),
    (Some("Rockstar"), Some("Developer who thinks they're too cool for documentation")),
    (Some("Guru"), Some("Someone who Googles things slightly faster than you")),
    (Some("Unicorn"), Some("Mythical creature that burns investor money")),
    (Some("Disruptor"), Some("Person who breaks things and calls it innovation")),
    (Some("Thought Leader"), Some("LinkedIn influencer with a thesaurus")),
    (Some("Digital Native"), Some("Person who can't remember life before WiFi")),
    (Some("Evangelist"), Some("Salesperson with religious fervor")),
    (Some("10x Engineer"), Some("Developer who creates 10x more bugs")),
    (Some("I'm pursuing other opportunities to maximize my potential"), Some("I quit")),
    (Some("We're restructuring your role for optimal efficiency"), Some("You're fired")),
    (Some("We're navigating some exciting market challenges"), Some("This company is doomed")),
    (Some("Leadership is exploring innovative strategic directions"), Some("The CEO is clueless")),
];

pub const LOADING_MESSAGES: &[&str] = &[
    "Translating corporate nonsense...",
    "Decoding the synergy matrix...",
    "Optimizing buzzword algorithms...",
    "Leveraging linguistic paradigms...",
    "Streamlining communication processes...",
    "Disrupting traditional translation methods...",
    "Ideating semantic solutions...",
    "Circling back on language patterns...",
    "Deep diving into corporate speak...",
    "Pivoting linguistic frameworks...",
];

pub const ERROR_MESSAGES: &[&str] = &[
    "Error 404: Synergy not found",
    "Oops! Our paradigm shifted unexpectedly",
    "Translation failed - not enough buzzwords detected",
    "System error: Ran out of corporate speak",
    "Warning: Bullshit levels exceeded maximum capacity",
    "Error: Unable to leverage core competencies",
    "Translation timeout - too much authentic communication detected",
    "System overload: Excessive honesty in input",
    "Error 500: Internal synergy malfunction",
    "Warning: Authenticity levels dangerously high",
];

pub const EMPTY_MESSAGES: &[&str] = &[
    "Awaiting corporate wisdom...",
    "Ready to decode your buzzwords",
    "Standing by for synergy translation",
    "Prepared to optimize your communication",
    "Ready to streamline your messaging",
    "Waiting for paradigm-shifting input",
    "Standing by to leverage your thoughts",
    "Ready to circle back on your ideas",
];

/// Single words that count towards the bullshit level on every occurrence.
pub const SCORING_BUZZWORDS: &[&str] = &[
    "synergy",
    "leverage",
    "paradigm",
    "optimize",
    "streamline",
    "scalable",
    "robust",
    "strategic",
    "holistic",
    "innovative",
    "disruptive",
    "agile",
    "dynamic",
    "comprehensive",
    "cutting-edge",
    "next-generation",
    "world-class",
    "mission-critical",
    "best-in-class",
    "value-driven",
    "results-oriented",
    "customer-centric",
    "data-driven",
    "seamless",
    "intuitive",
    "turnkey",
    "enterprise",
    "ecosystem",
    "framework",
    "methodology",
    "infrastructure",
];

/// General buzzword pool used by the generator.
pub const BUZZWORDS: &[&str] = &[
    "synergy", "paradigm", "ecosystem", "disruption", "innovation", "optimization",
    "leverage", "scalable", "robust", "dynamic", "strategic", "holistic",
    "comprehensive", "integrated", "streamlined", "cutting-edge", "next-generation",
    "world-class", "best-in-class", "mission-critical", "value-driven", "results-oriented",
    "customer-centric", "data-driven", "agile", "lean", "efficient", "effective",
    "seamless", "intuitive", "user-friendly", "turnkey", "end-to-end", "full-service",
    "enterprise", "solution", "platform", "framework", "methodology", "approach",
    "strategy", "vision", "roadmap", "blueprint", "architecture", "infrastructure",
];
