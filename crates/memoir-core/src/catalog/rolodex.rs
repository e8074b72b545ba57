//! The built-in master question rolodex.
//!
//! An abridged edition of the full memoir question bank: six life stages,
//! each prompt tagged with theme, register and sensitivity. The order below
//! is canonical for display and compilation.

use super::model::{Prompt, PromptCatalog, PromptKind, Sensitivity};

/// The prompt whose answer opens with the narrator's full name; the
/// compiled document title is derived from it.
pub const NAME_PROMPT_ID: &str = "B-001";

fn p(
    id: &str,
    text: &str,
    life_stage: &str,
    theme: &str,
    kind: PromptKind,
    sensitivity: Sensitivity,
) -> Prompt {
    Prompt {
        id: id.to_string(),
        text: text.to_string(),
        life_stage: life_stage.to_string(),
        theme: theme.to_string(),
        kind,
        sensitivity,
    }
}

/// Builds the built-in catalog.
///
/// Ids in the rolodex are unique by construction, so this cannot fail.
pub fn builtin_catalog() -> PromptCatalog {
    PromptCatalog::new(rolodex()).expect("builtin rolodex has unique prompt ids")
}

#[rustfmt::skip]
fn rolodex() -> Vec<Prompt> {
    vec![

        // --- Ancestry & Pre-Birth ---
        p("B-001", "To begin, could you please state your full name, and when and where you were born?", "Ancestry & Pre-Birth", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("B-002", "What stories have come down to you about your grandparents?", "Ancestry & Pre-Birth", "Love & Relationships", PromptKind::Factual, Sensitivity::Low),
        p("B-003", "What do you know about how your parents first met?", "Ancestry & Pre-Birth", "Love & Relationships", PromptKind::Factual, Sensitivity::Low),
        p("B-004", "What were your parents' names, and what were they like as people?", "Ancestry & Pre-Birth", "Love & Relationships", PromptKind::Reflective, Sensitivity::Low),
        p("B-005", "Were there any special naming traditions in your family? How did you get your name?", "Ancestry & Pre-Birth", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("B-006", "What country did your family emigrate from, if they did? Are there any stories about that journey?", "Ancestry & Pre-Birth", "The World Around Me", PromptKind::Factual, Sensitivity::Medium),
        p("B-007", "What kind of work did your grandparents and parents do?", "Ancestry & Pre-Birth", "Work & Purpose", PromptKind::Factual, Sensitivity::Low),
        p("B-008", "Describe the social and cultural atmosphere in the time and place you were born.", "Ancestry & Pre-Birth", "The World Around Me", PromptKind::Reflective, Sensitivity::Low),
        p("B-009", "Were there any major historical events happening around the time of your birth that your parents talked about?", "Ancestry & Pre-Birth", "The World Around Me", PromptKind::Factual, Sensitivity::Low),
        p("B-010", "What were your parents' hopes and dreams for you before you were born?", "Ancestry & Pre-Birth", "Love & Relationships", PromptKind::Reflective, Sensitivity::Low),
        p("B-011", "Do you know of any famous or infamous ancestors in your family line?", "Ancestry & Pre-Birth", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("B-012", "What traditions or values were emphasized in your family as it was passed down through generations?", "Ancestry & Pre-Birth", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Low),
        p("B-013", "Did your family have any heirlooms that were passed down? What's the story behind them?", "Ancestry & Pre-Birth", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("B-014", "What was the economic situation for your parents when you were born?", "Ancestry & Pre-Birth", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("B-015", "In what kind of community or neighborhood were you born into?", "Ancestry & Pre-Birth", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("B-016", "Was religion or spirituality a big part of your family's life before you were born?", "Ancestry & Pre-Birth", "Values & Beliefs", PromptKind::Factual, Sensitivity::Low),
        p("B-017", "What languages were spoken in your home or by your ancestors?", "Ancestry & Pre-Birth", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("B-018", "Were there any artists, musicians, or writers in your family?", "Ancestry & Pre-Birth", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("B-019", "What were the educational backgrounds of your parents and grandparents?", "Ancestry & Pre-Birth", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("B-020", "Do you know of any family rivalries or long-standing disputes?", "Ancestry & Pre-Birth", "Love & Relationships", PromptKind::Factual, Sensitivity::Medium),

        // --- Early Childhood ---
        p("C-001", "What is your earliest, most vivid memory from childhood?", "Early Childhood", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("C-002", "Describe the house you grew up in. What was your bedroom like? What did you do for fun there?", "Early Childhood", "Factual", PromptKind::Sensory, Sensitivity::Low),
        p("C-003", "What sort of relationship did you have with your parents as a child?", "Early Childhood", "Love & Relationships", PromptKind::Reflective, Sensitivity::Medium),
        p("C-004", "Did you have any siblings? If so, what was your relationship with them like?", "Early Childhood", "Love & Relationships", PromptKind::Factual, Sensitivity::Low),
        p("C-005", "Who were your best friends in elementary school? What games did you play?", "Early Childhood", "Love & Relationships", PromptKind::Factual, Sensitivity::Low),
        p("C-006", "What was a typical day like for you as a young child?", "Early Childhood", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("C-007", "What were your favorite foods? Were there any you couldn't stand?", "Early Childhood", "Factual", PromptKind::Sensory, Sensitivity::Low),
        p("C-008", "What scents do you associate with your childhood home? (e.g., baking bread, cut grass)", "Early Childhood", "Factual", PromptKind::Sensory, Sensitivity::Low),
        p("C-009", "Did you have any pets? Tell me about them.", "Early Childhood", "Love & Relationships", PromptKind::Factual, Sensitivity::Low),
        p("C-010", "What was your first day of school like?", "Early Childhood", "Factual", PromptKind::Reflective, Sensitivity::Low),
        p("C-011", "What was your favorite subject in elementary school? And your least favorite?", "Early Childhood", "Work & Purpose", PromptKind::Factual, Sensitivity::Low),
        p("C-012", "How did your family celebrate holidays or birthdays?", "Early Childhood", "Love & Relationships", PromptKind::Factual, Sensitivity::Low),
        p("C-013", "Were you ever in trouble as a child? What happened?", "Early Childhood", "Hardship & Resilience", PromptKind::Factual, Sensitivity::Low),
        p("C-014", "Did you have a favorite hiding spot?", "Early Childhood", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("C-015", "What was a favorite bedtime story or song?", "Early Childhood", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("C-016", "Were there any family vacations you remember? Where did you go?", "Early Childhood", "Love & Relationships", PromptKind::Factual, Sensitivity::Low),
        p("C-017", "What did you want to be when you grew up?", "Early Childhood", "Work & Purpose", PromptKind::Hypothetical, Sensitivity::Low),
        p("C-018", "Were you a shy or outgoing child?", "Early Childhood", "Factual", PromptKind::Reflective, Sensitivity::Low),
        p("C-019", "Describe a time you felt particularly proud of yourself as a child.", "Early Childhood", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Low),
        p("C-020", "Describe a time you felt scared.", "Early Childhood", "Hardship & Resilience", PromptKind::Reflective, Sensitivity::Medium),
        p("C-021", "What kind of chores did you have to do around the house?", "Early Childhood", "Work & Purpose", PromptKind::Factual, Sensitivity::Low),
        p("C-022", "Did you have an allowance? What did you spend it on?", "Early Childhood", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("C-023", "Who was the \"fun\" parent, and who was the \"strict\" parent?", "Early Childhood", "Love & Relationships", PromptKind::Reflective, Sensitivity::Low),
        p("C-024", "What was the first movie you remember seeing in a theater?", "Early Childhood", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("C-025", "What was your favorite toy or game?", "Early Childhood", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("C-026", "Did you learn to ride a bike? What was that like?", "Early Childhood", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("C-027", "Were there any special family traditions you looked forward to?", "Early Childhood", "Love & Relationships", PromptKind::Factual, Sensitivity::Low),
        p("C-028", "Did you have any childhood injuries or visits to the hospital?", "Early Childhood", "Hardship & Resilience", PromptKind::Factual, Sensitivity::Medium),
        p("C-029", "How did you learn about the world? (e.g., books, radio, television)", "Early Childhood", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("C-030", "What was your relationship like with your grandparents during this time?", "Early Childhood", "Love & Relationships", PromptKind::Reflective, Sensitivity::Low),
        p("C-031", "Did you have a favorite outfit or piece of clothing?", "Early Childhood", "Factual", PromptKind::Sensory, Sensitivity::Low),
        p("C-032", "Who taught you to read and write?", "Early Childhood", "Work & Purpose", PromptKind::Factual, Sensitivity::Low),
        p("C-033", "What were family meals like? Was there assigned seating?", "Early Childhood", "Love & Relationships", PromptKind::Factual, Sensitivity::Low),
        p("C-034", "Did you ever have a secret clubhouse or fort?", "Early Childhood", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("C-035", "What was the most beautiful place you remember from your childhood?", "Early Childhood", "Factual", PromptKind::Sensory, Sensitivity::Low),
        p("C-036", "What was the first time you realized your parents weren't perfect?", "Early Childhood", "Hardship & Resilience", PromptKind::Reflective, Sensitivity::Medium),
        p("C-037", "Did you collect anything as a child?", "Early Childhood", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("C-038", "What television shows or radio programs did you love?", "Early Childhood", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("C-039", "Were you ever bullied, or did you ever witness bullying?", "Early Childhood", "Hardship & Resilience", PromptKind::Reflective, Sensitivity::Medium),
        p("C-040", "What's a smell that instantly takes you back to being a kid?", "Early Childhood", "Factual", PromptKind::Sensory, Sensitivity::Low),

        // --- Adolescence ---
        p("A-001", "Moving on to your teenage years. Who was your most influential teacher, and why? What did they teach you that has stayed with you?", "Adolescence", "Work & Purpose", PromptKind::Reflective, Sensitivity::Low),
        p("A-002", "What did you and your friends do for fun when you were a teenager?", "Adolescence", "Love & Relationships", PromptKind::Factual, Sensitivity::Low),
        p("A-003", "What were your dreams and goals for your life when you graduated from high school?", "Adolescence", "Work & Purpose", PromptKind::Reflective, Sensitivity::Low),
        p("A-004", "Can you share a memory from your teenage years that was particularly happy or one that was particularly challenging?", "Adolescence", "Factual", PromptKind::Reflective, Sensitivity::Medium),
        p("A-005", "What was high school like for you? Were you part of any particular group or clique?", "Adolescence", "Love & Relationships", PromptKind::Reflective, Sensitivity::Low),
        p("A-006", "Did you play any sports or participate in extracurricular activities?", "Adolescence", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("A-007", "What kind of music were you and your friends listening to?", "Adolescence", "The World Around Me", PromptKind::Factual, Sensitivity::Low),
        p("A-008", "What was the fashion like when you were a teenager? What was your style?", "Adolescence", "The World Around Me", PromptKind::Factual, Sensitivity::Low),
        p("A-009", "Did you have a first love or crush? What was that person like?", "Adolescence", "Love & Relationships", PromptKind::Reflective, Sensitivity::Medium),
        p("A-010", "What was your first date like?", "Adolescence", "Love & Relationships", PromptKind::Factual, Sensitivity::Low),
        p("A-011", "Did you have a part-time job as a teenager?", "Adolescence", "Work & Purpose", PromptKind::Factual, Sensitivity::Low),
        p("A-012", "How did your relationship with your parents change during these years?", "Adolescence", "Love & Relationships", PromptKind::Reflective, Sensitivity::Medium),
        p("A-013", "What was the biggest argument you ever had with your parents?", "Adolescence", "Hardship & Resilience", PromptKind::Reflective, Sensitivity::Medium),
        p("A-014", "Did you learn to drive? What was your first car?", "Adolescence", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("A-015", "What were the major world events happening, and how did they affect you or your family?", "Adolescence", "The World Around Me", PromptKind::Reflective, Sensitivity::Low),
        p("A-016", "Was there a book or movie that had a big impact on you during this time?", "Adolescence", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Low),
        p("A-017", "Did you ever get into any trouble or do something rebellious?", "Adolescence", "Hardship & Resilience", PromptKind::Factual, Sensitivity::Medium),
        p("A-018", "What was your graduation day like?", "Adolescence", "Work & Purpose", PromptKind::Reflective, Sensitivity::Low),
        p("A-019", "Who was your best friend in high school? Are you still in touch?", "Adolescence", "Love & Relationships", PromptKind::Factual, Sensitivity::Low),
        p("A-020", "What was a typical weekend like for you as a teenager?", "Adolescence", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("A-021", "Did you have a hero or someone you looked up to?", "Adolescence", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Low),
        p("A-022", "What were you most insecure about as a teenager?", "Adolescence", "Hardship & Resilience", PromptKind::Reflective, Sensitivity::Medium),
        p("A-023", "What were you most confident about?", "Adolescence", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Low),
        p("A-024", "What was your prom or formal dance like?", "Adolescence", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("A-025", "Did you have a favorite hangout spot?", "Adolescence", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("A-026", "How did you think your life would turn out back then?", "Adolescence", "Hypothetical", PromptKind::Reflective, Sensitivity::Low),
        p("A-027", "What is your best memory from your teenage years?", "Adolescence", "Factual", PromptKind::Reflective, Sensitivity::Low),
        p("A-028", "And what is your most difficult memory from that time?", "Adolescence", "Hardship & Resilience", PromptKind::Reflective, Sensitivity::High),
        p("A-029", "How did you deal with peer pressure?", "Adolescence", "Hardship & Resilience", PromptKind::Reflective, Sensitivity::Low),
        p("A-030", "What technological changes happened during your teen years? (e.g., color TV, video games)", "Adolescence", "The World Around Me", PromptKind::Factual, Sensitivity::Low),
        p("A-031", "What was the most trouble you ever got into at school?", "Adolescence", "Hardship & Resilience", PromptKind::Factual, Sensitivity::Low),
        p("A-032", "Did you feel understood by the adults in your life?", "Adolescence", "Love & Relationships", PromptKind::Reflective, Sensitivity::Medium),
        p("A-033", "Was there a particular historical event during your teen years that shaped your view of the world?", "Adolescence", "The World Around Me", PromptKind::Reflective, Sensitivity::Low),
        p("A-034", "Did you ever have your heart broken?", "Adolescence", "Hardship & Resilience", PromptKind::Reflective, Sensitivity::Medium),
        p("A-035", "What did you and your friends talk about? What were the big concerns?", "Adolescence", "Love & Relationships", PromptKind::Factual, Sensitivity::Low),
        p("A-036", "What was the most important lesson a friend ever taught you?", "Adolescence", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Low),
        p("A-037", "Did you have any political awakenings during this time?", "Adolescence", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Low),
        p("A-038", "What was the most daring thing you did as a teenager?", "Adolescence", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("A-039", "How did you envision your future family life?", "Adolescence", "Hypothetical", PromptKind::Reflective, Sensitivity::Low),
        p("A-040", "Describe a moment you felt truly independent for the first time.", "Adolescence", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Low),

        // --- Early Adulthood ---
        p("EA-001", "Let's talk about early adulthood. Did you pursue further education after high school? What did you study?", "Early Adulthood", "Work & Purpose", PromptKind::Factual, Sensitivity::Low),
        p("EA-002", "How did you meet your spouse or primary partner? What was your courtship like?", "Early Adulthood", "Love & Relationships", PromptKind::Factual, Sensitivity::Low),
        p("EA-003", "Tell me about your first significant job. What valuable lessons did you learn there?", "Early Adulthood", "Work & Purpose", PromptKind::Reflective, Sensitivity::Low),
        p("EA-004", "What was it like becoming a parent for the first time? How did it change you?", "Early Adulthood", "Love & Relationships", PromptKind::Reflective, Sensitivity::Medium),
        p("EA-005", "Did you serve in the military? If so, would you be open to sharing some key moments you recall from your service?", "Early Adulthood", "The World Around Me", PromptKind::Factual, Sensitivity::High),
        p("EA-006", "If you went to college, what was your major? Why did you choose it?", "Early Adulthood", "Work & Purpose", PromptKind::Factual, Sensitivity::Low),
        p("EA-007", "Describe your college experience. What were the most memorable moments?", "Early Adulthood", "Factual", PromptKind::Reflective, Sensitivity::Low),
        p("EA-008", "If you didn't go to college, what did you do instead?", "Early Adulthood", "Work & Purpose", PromptKind::Factual, Sensitivity::Low),
        p("EA-009", "What was it like moving out of your parents' house for the first time?", "Early Adulthood", "Factual", PromptKind::Reflective, Sensitivity::Low),
        p("EA-010", "Describe your first apartment or home.", "Early Adulthood", "Factual", PromptKind::Sensory, Sensitivity::Low),
        p("EA-011", "What was your wedding day like, if you got married?", "Early Adulthood", "Love & Relationships", PromptKind::Reflective, Sensitivity::Low),
        p("EA-012", "What was the hardest adjustment you faced as a newlywed or new partner?", "Early Adulthood", "Hardship & Resilience", PromptKind::Reflective, Sensitivity::Medium),
        p("EA-013", "How did you decide on your career path? Was it a straight line or did it have twists and turns?", "Early Adulthood", "Work & Purpose", PromptKind::Reflective, Sensitivity::Low),
        p("EA-014", "Who were your mentors in your early career?", "Early Adulthood", "Work & Purpose", PromptKind::Factual, Sensitivity::Low),
        p("EA-015", "What was the biggest career risk you took during this time?", "Early Adulthood", "Work & Purpose", PromptKind::Reflective, Sensitivity::Medium),
        p("EA-016", "How did you and your partner decide to start a family, if you did?", "Early Adulthood", "Love & Relationships", PromptKind::Reflective, Sensitivity::Medium),
        p("EA-017", "What were the biggest joys and challenges of raising young children?", "Early Adulthood", "Love & Relationships", PromptKind::Reflective, Sensitivity::Medium),
        p("EA-018", "Did you travel anywhere interesting during this period of your life?", "Early Adulthood", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("EA-019", "How did you manage your finances? Was money tight?", "Early Adulthood", "Hardship & Resilience", PromptKind::Factual, Sensitivity::Medium),
        p("EA-020", "What was a major purchase you were proud of (e.g., first new car, first house)?", "Early Adulthood", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("EA-021", "How did your friendships evolve as you and your friends started careers and families?", "Early Adulthood", "Love & Relationships", PromptKind::Reflective, Sensitivity::Low),
        p("EA-022", "Was there a time you failed at something? What did you learn from it?", "Early Adulthood", "Hardship & Resilience", PromptKind::Reflective, Sensitivity::Medium),
        p("EA-023", "What hobbies or interests did you develop during this time?", "Early Adulthood", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("EA-024", "How did you balance work, family, and personal time?", "Early Adulthood", "Hardship & Resilience", PromptKind::Reflective, Sensitivity::Low),
        p("EA-025", "What was your relationship with your own parents like during this stage?", "Early Adulthood", "Love & Relationships", PromptKind::Reflective, Sensitivity::Medium),
        p("EA-026", "Did you experience the loss of a close family member or friend? How did you cope?", "Early Adulthood", "Hardship & Resilience", PromptKind::Reflective, Sensitivity::High),
        p("EA-027", "What was a typical weekday like for you in your 30s?", "Early Adulthood", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("EA-028", "And what was a typical weekend like?", "Early Adulthood", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("EA-029", "How did your political or social views begin to form or solidify?", "Early Adulthood", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Low),
        p("EA-030", "Was there a major turning point in your early adult life that changed its direction?", "Early Adulthood", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Medium),
        p("EA-031", "Describe a time you had to make a very difficult decision.", "Early Adulthood", "Hardship & Resilience", PromptKind::Reflective, Sensitivity::Medium),
        p("EA-032", "What community were you a part of? (e.g., neighborhood, church, social club)", "Early Adulthood", "Love & Relationships", PromptKind::Factual, Sensitivity::Low),
        p("EA-033", "What's a piece of advice you would give your 25-year-old self?", "Early Adulthood", "Values & Beliefs", PromptKind::Hypothetical, Sensitivity::Low),
        p("EA-034", "Tell me about a time you felt truly happy and content.", "Early Adulthood", "Factual", PromptKind::Reflective, Sensitivity::Low),
        p("EA-035", "How did you and your partner navigate disagreements or tough times?", "Early Adulthood", "Love & Relationships", PromptKind::Reflective, Sensitivity::Medium),
        p("EA-036", "What was the biggest financial mistake you made?", "Early Adulthood", "Hardship & Resilience", PromptKind::Reflective, Sensitivity::Medium),
        p("EA-037", "How did you celebrate your 21st birthday (or equivalent milestone)?", "Early Adulthood", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("EA-038", "Was there a piece of technology that changed how you worked or lived in your 20s/30s?", "Early Adulthood", "The World Around Me", PromptKind::Factual, Sensitivity::Low),
        p("EA-039", "Did you ever experience a \"quarter-life crisis\"?", "Early Adulthood", "Hardship & Resilience", PromptKind::Reflective, Sensitivity::Medium),
        p("EA-040", "What was the best piece of career advice you ever received?", "Early Adulthood", "Work & Purpose", PromptKind::Factual, Sensitivity::Low),
        p("EA-041", "Who did you turn to for advice when making big life decisions?", "Early Adulthood", "Love & Relationships", PromptKind::Factual, Sensitivity::Low),
        p("EA-042", "How did you and your partner decide where to live?", "Early Adulthood", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("EA-043", "What was the atmosphere in the country/world like, and did it affect your choices?", "Early Adulthood", "The World Around Me", PromptKind::Reflective, Sensitivity::Low),
        p("EA-044", "Tell me about a major sacrifice you made for your family or career.", "Early Adulthood", "Hardship & Resilience", PromptKind::Reflective, Sensitivity::High),
        p("EA-045", "Did you ever lose a job? How did you handle that?", "Early Adulthood", "Hardship & Resilience", PromptKind::Reflective, Sensitivity::High),

        // --- Mid-Life ---
        p("ML-001", "As you entered mid-life, what accomplishment in your career are you most proud of?", "Mid-Life", "Work & Purpose", PromptKind::Reflective, Sensitivity::Low),
        p("ML-002", "What was the biggest challenge you faced in your life, and how did you overcome it?", "Mid-Life", "Hardship & Resilience", PromptKind::Reflective, Sensitivity::High),
        p("ML-003", "How did your values or personal beliefs change as you got older?", "Mid-Life", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Medium),
        p("ML-004", "How did you see the world change around you during this period? Were there any major historical events that personally affected you?", "Mid-Life", "The World Around Me", PromptKind::Reflective, Sensitivity::Medium),
        p("ML-005", "As your children became teenagers, how did your parenting style change?", "Mid-Life", "Love & Relationships", PromptKind::Reflective, Sensitivity::Low),
        p("ML-006", "What was it like to have an \"empty nest\" when your children moved out?", "Mid-Life", "Love & Relationships", PromptKind::Reflective, Sensitivity::Medium),
        p("ML-007", "Did you make any career changes in mid-life? Why?", "Mid-Life", "Work & Purpose", PromptKind::Reflective, Sensitivity::Low),
        p("ML-008", "What professional achievement from this period stands out the most?", "Mid-Life", "Work & Purpose", PromptKind::Factual, Sensitivity::Low),
        p("ML-009", "How did you take care of your health and well-being during these years?", "Mid-Life", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("ML-010", "Did you pick up any new hobbies or passions in your 40s or 50s?", "Mid-Life", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("ML-011", "How did your relationship with your spouse or partner evolve during this time?", "Mid-Life", "Love & Relationships", PromptKind::Reflective, Sensitivity::Low),
        p("ML-012", "Did you become a caregiver for your own parents? What was that experience like?", "Mid-Life", "Hardship & Resilience", PromptKind::Reflective, Sensitivity::High),
        p("ML-013", "What was the most significant world event that happened during your mid-life, and how did you react to it?", "Mid-Life", "The World Around Me", PromptKind::Reflective, Sensitivity::Low),
        p("ML-014", "How did you see technology change the world and your life during this period?", "Mid-Life", "The World Around Me", PromptKind::Reflective, Sensitivity::Low),
        p("ML-015", "What kind of vacations did you take? Any favorites?", "Mid-Life", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("ML-016", "Reflecting on your career, what do you feel was your biggest contribution?", "Mid-Life", "Work & Purpose", PromptKind::Reflective, Sensitivity::Low),
        p("ML-017", "Did your spiritual or philosophical beliefs change or deepen?", "Mid-Life", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Low),
        p("ML-018", "How did you define \"success\" for yourself at this stage of life?", "Mid-Life", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Low),
        p("ML-019", "Tell me about a friendship that was particularly important to you during mid-life.", "Mid-Life", "Love & Relationships", PromptKind::Reflective, Sensitivity::Low),
        p("ML-020", "Was there a book, film, or piece of music that deeply moved you in this period?", "Mid-Life", "Factual", PromptKind::Reflective, Sensitivity::Low),
        p("ML-021", "What was turning 40 like for you? How about turning 50?", "Mid-Life", "Factual", PromptKind::Reflective, Sensitivity::Low),
        p("ML-022", "Is there a skill you wish you had learned?", "Mid-Life", "Hypothetical", PromptKind::Hypothetical, Sensitivity::Low),
        p("ML-023", "How did you handle stress or burnout?", "Mid-Life", "Hardship & Resilience", PromptKind::Reflective, Sensitivity::Low),
        p("ML-024", "What was a major obstacle you had to overcome in your personal life?", "Mid-Life", "Hardship & Resilience", PromptKind::Reflective, Sensitivity::High),
        p("ML-025", "Did you get involved in any community service or volunteering?", "Mid-Life", "Work & Purpose", PromptKind::Factual, Sensitivity::Low),
        p("ML-026", "What was your proudest moment as a parent of older children?", "Mid-Life", "Love & Relationships", PromptKind::Reflective, Sensitivity::Low),
        p("ML-027", "How did your perspective on money and material possessions change?", "Mid-Life", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Low),
        p("ML-028", "Did you reconnect with any old friends or family members?", "Mid-Life", "Love & Relationships", PromptKind::Factual, Sensitivity::Low),
        p("ML-029", "What did you learn about yourself during your mid-life years?", "Mid-Life", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Low),
        p("ML-030", "Was there a moment of personal transformation or a significant realization?", "Mid-Life", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Medium),
        p("ML-031", "How did you celebrate major anniversaries or milestones?", "Mid-Life", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("ML-032", "What did you do for fun and relaxation?", "Mid-Life", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("ML-033", "If you could relive one year from this period, which would it be and why?", "Mid-Life", "Hypothetical", PromptKind::Hypothetical, Sensitivity::Low),
        p("ML-034", "Did you have to confront your own mortality in any way during this time?", "Mid-Life", "Hardship & Resilience", PromptKind::Reflective, Sensitivity::High),
        p("ML-035", "What traditions did you establish with your own family?", "Mid-Life", "Love & Relationships", PromptKind::Factual, Sensitivity::Low),
        p("ML-036", "Did you feel you were becoming more or less like your parents?", "Mid-Life", "Love & Relationships", PromptKind::Reflective, Sensitivity::Low),
        p("ML-037", "What was the most expensive thing you ever bought? Was it worth it?", "Mid-Life", "Factual", PromptKind::Reflective, Sensitivity::Low),
        p("ML-038", "How did you stay in touch with your children after they left home?", "Mid-Life", "Love & Relationships", PromptKind::Factual, Sensitivity::Low),
        p("ML-039", "What was your proudest \"non-work\" or \"non-parenting\" achievement from this time?", "Mid-Life", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Low),
        p("ML-040", "Did you ever go back to school or learn a new major skill?", "Mid-Life", "Work & Purpose", PromptKind::Factual, Sensitivity::Low),
        p("ML-041", "How did you see your role in the world change?", "Mid-Life", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Low),
        p("ML-042", "Did you attend any weddings of your children or close family friends?", "Mid-Life", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("ML-043", "What was a moment you felt \"old\"? What was a moment you felt \"young\"?", "Mid-Life", "Reflective", PromptKind::Reflective, Sensitivity::Low),
        p("ML-044", "Was there a point where you felt financially secure? What did that feel like?", "Mid-Life", "Factual", PromptKind::Reflective, Sensitivity::Low),
        p("ML-045", "What did you learn about love after being with your partner for so long?", "Mid-Life", "Love & Relationships", PromptKind::Reflective, Sensitivity::Low),

        // --- Later Years ---
        p("LR-001", "Now, thinking about your later years and reflecting back. What are the most important lessons you've learned in your life?", "Later Years", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Low),
        p("LR-002", "What advice would you give to your eighteen-year-old self today?", "Later Years", "Values & Beliefs", PromptKind::Hypothetical, Sensitivity::Low),
        p("LR-003", "Are there any things you wish you'd done differently?", "Later Years", "Hardship & Resilience", PromptKind::Reflective, Sensitivity::High),
        p("LR-004", "Looking back on everything, what are you most proud of?", "Later Years", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Medium),
        p("LR-005", "How would you like to be remembered?", "Later Years", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Medium),
        p("LR-006", "What was the transition into retirement like for you?", "Later Years", "Work & Purpose", PromptKind::Reflective, Sensitivity::Low),
        p("LR-007", "If you are not retired, do you plan to be? What are your thoughts on it?", "Later Years", "Work & Purpose", PromptKind::Hypothetical, Sensitivity::Low),
        p("LR-008", "How do you spend a typical day now?", "Later Years", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("LR-009", "What does it feel like to be a grandparent, if you are one?", "Later Years", "Love & Relationships", PromptKind::Reflective, Sensitivity::Low),
        p("LR-010", "What do you enjoy most about this stage of your life?", "Later Years", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Low),
        p("LR-011", "What are the biggest challenges of this stage?", "Later Years", "Hardship & Resilience", PromptKind::Reflective, Sensitivity::Medium),
        p("LR-012", "How has your health been? How do you manage it?", "Later Years", "Factual", PromptKind::Factual, Sensitivity::Medium),
        p("LR-013", "What have been the most significant changes in the world that you've witnessed over your lifetime?", "Later Years", "The World Around Me", PromptKind::Reflective, Sensitivity::Low),
        p("LR-014", "Of all the places you've lived, which one felt most like home?", "Later Years", "Factual", PromptKind::Reflective, Sensitivity::Low),
        p("LR-015", "What does the word \"family\" mean to you now?", "Later Years", "Love & Relationships", PromptKind::Reflective, Sensitivity::Low),
        p("LR-016", "What is a possession you treasure most and why?", "Later Years", "Factual", PromptKind::Reflective, Sensitivity::Low),
        p("LR-017", "What do you think is the secret to a long and happy marriage or partnership?", "Later Years", "Love & Relationships", PromptKind::Reflective, Sensitivity::Low),
        p("LR-018", "What is your perspective on forgiveness?", "Later Years", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Medium),
        p("LR-019", "What role does spirituality or faith play in your life today?", "Later Years", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Low),
        p("LR-020", "What are you still curious about?", "Later Years", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Low),
        p("LR-021", "How do you stay connected with friends and family?", "Later Years", "Love & Relationships", PromptKind::Factual, Sensitivity::Low),
        p("LR-022", "What activity makes you feel most alive and engaged?", "Later Years", "Factual", PromptKind::Reflective, Sensitivity::Low),
        p("LR-023", "What accomplishment, big or small, recently made you proud?", "Later Years", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Low),
        p("LR-024", "What is a piece of wisdom you'd want to pass on to your grandchildren or younger generations?", "Later Years", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Low),
        p("LR-025", "How has your definition of happiness changed over the years?", "Later Years", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Low),
        p("LR-026", "What are you grateful for?", "Later Years", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Low),
        p("LR-027", "Looking back, what was the happiest period of your life? Why?", "Later Years", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Low),
        p("LR-028", "What was the most difficult period? What got you through it?", "Later Years", "Hardship & Resilience", PromptKind::Reflective, Sensitivity::High),
        p("LR-029", "Is there anything on your \"bucket list\" that you still hope to do?", "Later Years", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("LR-030", "What is your hope for the future of your family?", "Later Years", "Love & Relationships", PromptKind::Hypothetical, Sensitivity::Low),
        p("LR-031", "What is your hope for the future of the world?", "Later Years", "The World Around Me", PromptKind::Hypothetical, Sensitivity::Low),
        p("LR-032", "If you could have dinner with any three people from your past, who would they be and why?", "Later Years", "Hypothetical", PromptKind::Hypothetical, Sensitivity::Low),
        p("LR-033", "How do you think the world has gotten better? How has it gotten worse?", "Later Years", "The World Around Me", PromptKind::Reflective, Sensitivity::Low),
        p("LR-034", "What do you fear, if anything?", "Later Years", "Hardship & Resilience", PromptKind::Reflective, Sensitivity::Medium),
        p("LR-035", "What is a simple pleasure that you enjoy regularly?", "Later Years", "Factual", PromptKind::Factual, Sensitivity::Low),
        p("LR-036", "What's the biggest difference between the world today and the world you were born into?", "Later Years", "The World Around Me", PromptKind::Reflective, Sensitivity::Low),
        p("LR-037", "If your life was a book, what would the title be?", "Later Years", "Values & Beliefs", PromptKind::Hypothetical, Sensitivity::Low),
        p("LR-038", "What do people misunderstand about your generation?", "Later Years", "The World Around Me", PromptKind::Reflective, Sensitivity::Low),
        p("LR-039", "What has been the most surprising part of growing older?", "Later Years", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Low),
        p("LR-040", "When you are gone, what is the one story you hope people will continue to tell about you?", "Later Years", "Values & Beliefs", PromptKind::Reflective, Sensitivity::Medium),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 230);
        assert_eq!(
            catalog.life_stages(),
            vec![
                "Ancestry & Pre-Birth",
                "Early Childhood",
                "Adolescence",
                "Early Adulthood",
                "Mid-Life",
                "Later Years",
            ]
        );
    }

    #[test]
    fn test_name_prompt_present() {
        let catalog = builtin_catalog();
        let name_prompt = catalog.get(NAME_PROMPT_ID).unwrap();
        assert_eq!(name_prompt.life_stage, "Ancestry & Pre-Birth");
        assert_eq!(name_prompt.sensitivity, Sensitivity::Low);
    }
}
