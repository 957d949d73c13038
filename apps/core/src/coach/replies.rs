//! The fixed advice texts.
//!
//! Pure content data: one block per topic, the capability menu returned when
//! no topic matches, and the greeting that opens every conversation. Markdown
//! and emoji are part of the payload; the UI renders the text as-is.

use super::topics::Topic;

const WEIGHT_LOSS: &str = "🎯 **Weight Loss Tips:**\n\n\
    1. **Caloric Deficit**: Consume fewer calories than you burn (aim for 300-500 calorie deficit)\n\
    2. **Protein Intake**: Eat 1.6-2.2g protein per kg body weight to preserve muscle\n\
    3. **Strength Training**: 3-4 times per week to maintain metabolism\n\
    4. **Cardio**: 150-300 minutes of moderate activity weekly\n\
    5. **Sleep**: Get 7-9 hours - poor sleep increases hunger hormones\n\
    6. **Hydration**: Drink 3-4 liters of water daily\n\
    7. **Avoid**: Processed foods, sugary drinks, excessive snacking\n\n\
    💡 **Pro Tip**: Sustainable weight loss is 0.5-1kg per week. Focus on building healthy habits rather than quick fixes!";

const MUSCLE_GAIN: &str = "💪 **Muscle Building Guide:**\n\n\
    1. **Caloric Surplus**: Eat 300-500 calories above maintenance\n\
    2. **Protein**: 1.6-2.2g per kg body weight daily\n\
    3. **Progressive Overload**: Gradually increase weight/reps\n\
    4. **Workout Split**: Train each muscle group 2x per week\n\
    5. **Compound Exercises**: Focus on squats, deadlifts, bench press, rows\n\
    6. **Recovery**: 48-72 hours rest between training same muscle group\n\
    7. **Carbs**: Eat complex carbs (rice, oats, potatoes) for energy\n\n\
    🍗 **Sample Meal Plan**: 4-6 meals daily with protein source in each (chicken, eggs, fish, legumes)\n\n\
    ⏰ **Patience**: Expect 0.25-0.5kg muscle gain per month for natural lifters.";

const WORKOUT: &str = "🏋️ **Workout Plan Options:**\n\n\
    **For Beginners (3 days/week):**\n\
    • Monday: Full Body (Squats, Push-ups, Rows, Planks)\n\
    • Wednesday: Full Body (Lunges, Overhead Press, Pull-ups, Crunches)\n\
    • Friday: Full Body (Deadlifts, Bench Press, Lat Pulldowns, Leg Raises)\n\n\
    **Intermediate (4 days/week):**\n\
    • Day 1: Upper Body Push\n\
    • Day 2: Lower Body\n\
    • Day 3: Rest\n\
    • Day 4: Upper Body Pull\n\
    • Day 5: Lower Body\n\n\
    **Each Session:**\n\
    • Warm-up: 5-10 minutes\n\
    • Main workout: 45-60 minutes\n\
    • Cool down: 5-10 minutes stretching\n\n\
    📝 Start with 3 sets of 8-12 reps for each exercise!";

const NUTRITION: &str = "🥗 **Healthy Nutrition Guide:**\n\n\
    **Daily Macros:**\n\
    • Protein: 25-35% of calories (lean meats, eggs, fish, legumes)\n\
    • Carbs: 45-55% (whole grains, fruits, vegetables)\n\
    • Fats: 20-30% (nuts, avocado, olive oil, fatty fish)\n\n\
    **Meal Structure:**\n\n\
    🍳 **Breakfast**: Oats with protein powder, eggs with vegetables\n\
    🥙 **Lunch**: Grilled chicken/fish with brown rice and salad\n\
    🍎 **Snacks**: Greek yogurt, nuts, fruits\n\
    🍽️ **Dinner**: Lean protein with quinoa/sweet potato and veggies\n\n\
    **Foods to Prioritize:**\n\
    ✅ Leafy greens, berries, lean proteins, whole grains, healthy fats\n\
    ❌ Processed foods, sugary drinks, trans fats, excessive alcohol\n\n\
    💧 **Hydration**: Drink 3-4 liters of water daily!";

const MENTAL_HEALTH: &str = "🧘 **Mental Health & Stress Management:**\n\n\
    **Immediate Relief:**\n\
    • Deep breathing: 4-7-8 technique (inhale 4s, hold 7s, exhale 8s)\n\
    • Take a walk outside for 10-15 minutes\n\
    • Practice progressive muscle relaxation\n\n\
    **Daily Habits:**\n\
    1. **Exercise**: 30 min daily - releases endorphins\n\
    2. **Sleep**: 7-9 hours - crucial for mental health\n\
    3. **Meditation**: 10-20 minutes mindfulness practice\n\
    4. **Social Connection**: Talk to friends/family regularly\n\
    5. **Limit Screen Time**: Especially before bed\n\
    6. **Journaling**: Write down thoughts and feelings\n\n\
    **Natural Stress Reducers:**\n\
    • Omega-3 fatty acids (fish, walnuts)\n\
    • Magnesium-rich foods (spinach, almonds)\n\
    • Green tea (contains L-theanine)\n\
    • Regular sunlight exposure\n\n\
    ⚠️ If symptoms persist, please consult a mental health professional.";

const SLEEP: &str = "😴 **Better Sleep Guide:**\n\n\
    **Sleep Hygiene Rules:**\n\
    1. **Consistent Schedule**: Same bedtime & wake time daily\n\
    2. **Dark Room**: Use blackout curtains, remove electronics\n\
    3. **Cool Temperature**: 60-67°F (15-19°C) is optimal\n\
    4. **No Screens**: Avoid blue light 1-2 hours before bed\n\
    5. **No Caffeine**: After 2 PM\n\
    6. **Light Dinner**: Eat 2-3 hours before bed\n\n\
    **Bedtime Routine:**\n\
    • 9:00 PM - Dim lights, stop work\n\
    • 9:30 PM - Warm shower/bath\n\
    • 10:00 PM - Read or light stretching\n\
    • 10:30 PM - Sleep time\n\n\
    **Natural Sleep Aids:**\n\
    • Magnesium supplement (400mg)\n\
    • Chamomile tea\n\
    • Lavender essential oil\n\
    • 4-7-8 breathing technique\n\n\
    🎯 **Goal**: 7-9 hours of quality sleep per night!";

const INJURY: &str = "🏥 **Injury Prevention & Recovery:**\n\n\
    **For Muscle Soreness (DOMS):**\n\
    • Light activity/walking to increase blood flow\n\
    • Foam rolling and stretching\n\
    • Adequate protein intake (helps repair)\n\
    • Stay hydrated\n\
    • Get enough sleep\n\n\
    **For Acute Injury (RICE Protocol):**\n\
    • **R**est: Stop the activity\n\
    • **I**ce: Apply for 15-20 min every 2-3 hours\n\
    • **C**ompression: Use bandage to reduce swelling\n\
    • **E**levation: Keep injured area raised\n\n\
    **Prevention Tips:**\n\
    1. Always warm up before exercise (5-10 min)\n\
    2. Use proper form - quality over quantity\n\
    3. Progress gradually - don't increase intensity too fast\n\
    4. Include rest days in your routine\n\
    5. Listen to your body\n\n\
    ⚠️ **Red Flags**: If you have severe pain, swelling, or limited mobility, please see a doctor immediately!";

/// The default reply when no topic matches: a menu of what the coach can do.
pub const CAPABILITY_MENU: &str = "I'm here to help with your health and fitness questions! 🌟\n\n\
    I can provide advice on:\n\n\
    ✅ **Fitness**: Workout routines, exercise techniques\n\
    ✅ **Nutrition**: Diet plans, meal prep, macros\n\
    ✅ **Weight Management**: Loss, gain, or maintenance\n\
    ✅ **Recovery**: Sleep, injury prevention\n\
    ✅ **Wellness**: Stress management, mental health\n\n\
    Please ask me a specific question, and I'll provide detailed advice!\n\n\
    Examples:\n\
    • \"How can I lose weight?\"\n\
    • \"What's a good workout routine?\"\n\
    • \"Tips for better sleep?\"";

/// The coach's opening message, seeded as the first entry of every
/// conversation.
pub const GREETING: &str = "Hello! 👋 I'm your Personal Health Coach. I'm here to help you on your \
    wellness journey. Whether you want to improve your nutrition, build better exercise habits, \
    sleep better, or manage stress, I'm here to support you.\n\nHow can I help you today?";

/// Returns the advice block for a topic.
pub fn advice_for(topic: Topic) -> &'static str {
    match topic {
        Topic::WeightLoss => WEIGHT_LOSS,
        Topic::MuscleGain => MUSCLE_GAIN,
        Topic::Workout => WORKOUT,
        Topic::Nutrition => NUTRITION,
        Topic::MentalHealth => MENTAL_HEALTH,
        Topic::Sleep => SLEEP,
        Topic::Injury => INJURY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advice_headers() {
        assert!(advice_for(Topic::WeightLoss).starts_with("🎯 **Weight Loss Tips:**"));
        assert!(advice_for(Topic::MuscleGain).starts_with("💪 **Muscle Building Guide:**"));
        assert!(advice_for(Topic::Workout).starts_with("🏋️ **Workout Plan Options:**"));
        assert!(advice_for(Topic::Nutrition).starts_with("🥗 **Healthy Nutrition Guide:**"));
        assert!(advice_for(Topic::MentalHealth).starts_with("🧘 **Mental Health & Stress Management:**"));
        assert!(advice_for(Topic::Sleep).starts_with("😴 **Better Sleep Guide:**"));
        assert!(advice_for(Topic::Injury).starts_with("🏥 **Injury Prevention & Recovery:**"));
    }

    #[test]
    fn test_menu_lists_every_capability() {
        for section in ["Fitness", "Nutrition", "Weight Management", "Recovery", "Wellness"] {
            assert!(CAPABILITY_MENU.contains(section), "menu is missing {}", section);
        }
    }

    #[test]
    fn test_greeting_is_multiline() {
        assert!(GREETING.starts_with("Hello!"));
        assert!(GREETING.ends_with("How can I help you today?"));
        assert!(GREETING.contains("\n\n"));
    }
}
