use serde::{Deserialize, Serialize};

/// Interface language, persisted under the `"language"` store key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Portuguese is the product's home market and the fallback table.
    #[default]
    Pt,
    En,
    Hi,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
            Language::Hi => "hi",
        }
    }

    /// Parses a persisted language code. Unknown codes yield `None`; callers
    /// fall back to `pt`.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "pt" => Some(Language::Pt),
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            _ => None,
        }
    }
}

/// Static-table lookup with the pt table as fallback, then the key itself
/// so a missing entry stays visible in the UI instead of rendering blank.
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    match lookup(language, key).or_else(|| lookup(Language::Pt, key)) {
        Some(text) => text,
        None => key,
    }
}

fn lookup(language: Language, key: &str) -> Option<&'static str> {
    match language {
        Language::Pt => pt(key),
        Language::En => en(key),
        Language::Hi => hi(key),
    }
}

fn pt(key: &str) -> Option<&'static str> {
    let text = match key {
        // Splash
        "selectLanguage" => "Selecione seu idioma",
        "continue" => "Continuar",
        // Onboarding - informações pessoais
        "personalInfo" => "Informações Pessoais",
        "name" => "Nome",
        "email" => "Email",
        "password" => "Senha",
        "birthDate" => "Data de Nascimento",
        "sex" => "Sexo (opcional)",
        "male" => "Masculino",
        "female" => "Feminino",
        "other" => "Outro",
        "preferNotToSay" => "Prefiro não dizer",
        "next" => "Próximo",
        "back" => "Voltar",
        // Onboarding - fitness
        "fitnessInfo" => "Informações de Condicionamento",
        "workoutsPerWeek" => "Quantos treinos faz por semana?",
        "twoTimes" => "2 vezes",
        "threeToFive" => "3 a 5 vezes",
        "sixPlus" => "6+",
        "currentGoal" => "Qual sua meta atual?",
        "loseWeight" => "Perder peso",
        "gainWeight" => "Ganhar peso",
        "maintainWeight" => "Manter peso",
        "currentWeight" => "Qual é seu peso atual? (kg)",
        "desiredWeight" => "Qual é o seu peso desejado? (kg)",
        "obstacles" => "O que está impedindo você de atingir seu objetivo?",
        "lackOfConsistency" => "Falta de consistência",
        "badEatingHabits" => "Hábitos alimentares ruins",
        "lackOfSupport" => "Falta de apoio",
        "busySchedule" => "Agenda lotada",
        "lackOfMealInspiration" => "Falta de inspiração para refeições",
        "achievements" => "O que você gostaria de alcançar?",
        "eatHealthier" => "Comer e viver de forma mais saudável",
        "increaseEnergy" => "Aumentar energia e melhorar humor",
        "stayMotivated" => "Manter-se motivado e consistente",
        "feelBetter" => "Sentir-se melhor com o corpo",
        "finish" => "Finalizar",
        // Testimonials
        "testimonials" => "O que nossos usuários dizem",
        "testimonial1" => "Perdi 8kg em 2 meses com o BR AI, recomendo!",
        "testimonial2" => "Aplicativo simples e completo, me ajudou muito!",
        "testimonial3" => "A IA de calorias é surpreendente, amei!",
        "startNow" => "Começar Agora",
        // Comum
        "step" => "Passo",
        "of" => "de",
        "defaultUser" => "Usuário",
        _ => return None,
    };
    Some(text)
}

fn en(key: &str) -> Option<&'static str> {
    let text = match key {
        // Splash
        "selectLanguage" => "Select your language",
        "continue" => "Continue",
        // Onboarding - personal info
        "personalInfo" => "Personal Information",
        "name" => "Name",
        "email" => "Email",
        "password" => "Password",
        "birthDate" => "Birth Date",
        "sex" => "Sex (optional)",
        "male" => "Male",
        "female" => "Female",
        "other" => "Other",
        "preferNotToSay" => "Prefer not to say",
        "next" => "Next",
        "back" => "Back",
        // Onboarding - fitness
        "fitnessInfo" => "Fitness Information",
        "workoutsPerWeek" => "How many workouts per week?",
        "twoTimes" => "2 times",
        "threeToFive" => "3 to 5 times",
        "sixPlus" => "6+",
        "currentGoal" => "What is your current goal?",
        "loseWeight" => "Lose weight",
        "gainWeight" => "Gain weight",
        "maintainWeight" => "Maintain weight",
        "currentWeight" => "What is your current weight? (kg)",
        "desiredWeight" => "What is your desired weight? (kg)",
        "obstacles" => "What is preventing you from reaching your goal?",
        "lackOfConsistency" => "Lack of consistency",
        "badEatingHabits" => "Bad eating habits",
        "lackOfSupport" => "Lack of support",
        "busySchedule" => "Busy schedule",
        "lackOfMealInspiration" => "Lack of meal inspiration",
        "achievements" => "What would you like to achieve?",
        "eatHealthier" => "Eat and live healthier",
        "increaseEnergy" => "Increase energy and improve mood",
        "stayMotivated" => "Stay motivated and consistent",
        "feelBetter" => "Feel better about my body",
        "finish" => "Finish",
        // Testimonials
        "testimonials" => "What our users say",
        "testimonial1" => "Lost 8kg in 2 months with BR AI, highly recommend!",
        "testimonial2" => "Simple and complete app, helped me a lot!",
        "testimonial3" => "The calorie AI is amazing, loved it!",
        "startNow" => "Start Now",
        // Common
        "step" => "Step",
        "of" => "of",
        "defaultUser" => "User",
        _ => return None,
    };
    Some(text)
}

fn hi(key: &str) -> Option<&'static str> {
    let text = match key {
        // Splash
        "selectLanguage" => "अपनी भाषा चुनें",
        "continue" => "जारी रखें",
        // Onboarding - personal info
        "personalInfo" => "व्यक्तिगत जानकारी",
        "name" => "नाम",
        "email" => "ईमेल",
        "password" => "पासवर्ड",
        "birthDate" => "जन्म तिथि",
        "sex" => "लिंग (वैकल्पिक)",
        "male" => "पुरुष",
        "female" => "महिला",
        "other" => "अन्य",
        "preferNotToSay" => "नहीं बताना चाहते",
        "next" => "अगला",
        "back" => "पीछे",
        // Onboarding - fitness
        "fitnessInfo" => "फिटनेस जानकारी",
        "workoutsPerWeek" => "सप्ताह में कितनी बार व्यायाम करते हैं?",
        "twoTimes" => "2 बार",
        "threeToFive" => "3 से 5 बार",
        "sixPlus" => "6+",
        "currentGoal" => "आपका वर्तमान लक्ष्य क्या है?",
        "loseWeight" => "वजन कम करना",
        "gainWeight" => "वजन बढ़ाना",
        "maintainWeight" => "वजन बनाए रखना",
        "currentWeight" => "आपका वर्तमान वजन क्या है? (किलो)",
        "desiredWeight" => "आपका वांछित वजन क्या है? (किलो)",
        "obstacles" => "आपको अपने लक्ष्य तक पहुंचने से क्या रोक रहा है?",
        "lackOfConsistency" => "निरंतरता की कमी",
        "badEatingHabits" => "खराब खाने की आदतें",
        "lackOfSupport" => "समर्थन की कमी",
        "busySchedule" => "व्यस्त कार्यक्रम",
        "lackOfMealInspiration" => "भोजन प्रेरणा की कमी",
        "achievements" => "आप क्या हासिल करना चाहेंगे?",
        "eatHealthier" => "स्वस्थ खाना और जीना",
        "increaseEnergy" => "ऊर्जा बढ़ाना और मूड सुधारना",
        "stayMotivated" => "प्रेरित और निरंतर रहना",
        "feelBetter" => "शरीर के बारे में बेहतर महसूस करना",
        "finish" => "समाप्त करें",
        // Testimonials
        "testimonials" => "हमारे उपयोगकर्ता क्या कहते हैं",
        "testimonial1" => "BR AI के साथ 2 महीने में 8 किलो कम किया, सिफारिश करता हूं!",
        "testimonial2" => "सरल और पूर्ण ऐप, मुझे बहुत मदद मिली!",
        "testimonial3" => "कैलोरी AI अद्भुत है, पसंद आया!",
        "startNow" => "अभी शुरू करें",
        // Common
        "step" => "चरण",
        "of" => "का",
        "defaultUser" => "उपयोगकर्ता",
        _ => return None,
    };
    Some(text)
}
