//! The compiled-in curriculum. Edit and redeploy to change it.

use academy_domain::{Lesson, LessonStatus, Module};

macro_rules! notebook_base {
    () => {
        "https://colab.research.google.com/github/gouthamgo/FineTuning/blob/main/lessons/"
    };
}

macro_rules! notebook {
    ($path:literal) => {
        Some(concat!(notebook_base!(), $path))
    };
}

/// Prefix shared by every notebook link in the built-in catalog.
pub const NOTEBOOK_BASE: &str = notebook_base!();

pub(crate) static MODULES: &[Module] = &[
    Module {
        key: "module1",
        title: "🌱 Foundations",
        emoji: "🟢",
        subtitle: "Start your journey - understand the basics",
        duration: "Week 1",
        lessons: FOUNDATIONS,
    },
    Module {
        key: "module2",
        title: "🚀 Your First Fine-Tuning",
        emoji: "🟡",
        subtitle: "This is where the magic happens!",
        duration: "Week 2",
        lessons: FIRST_TRAINING,
    },
    Module {
        key: "module3",
        title: "🎯 Advanced Techniques",
        emoji: "🔵",
        subtitle: "Level up your skills!",
        duration: "Week 3",
        lessons: ADVANCED,
    },
    Module {
        key: "module4",
        title: "💼 Real-World Projects",
        emoji: "🟠",
        subtitle: "Build something awesome!",
        duration: "Week 4",
        lessons: PROJECTS,
    },
    Module {
        key: "module5",
        title: "🌐 Deployment & Production",
        emoji: "🟣",
        subtitle: "Ship it to the world!",
        duration: "Week 5",
        lessons: DEPLOYMENT,
    },
];

const FOUNDATIONS: &[Lesson] = &[
    Lesson {
        id: "m1l1",
        title: "What Even is Fine-Tuning? (Let's Talk Like Friends)",
        duration: "30 min",
        difficulty: "Super Beginner",
        description: "Seriously, what is this fine-tuning thing everyone talks about? I'll explain it like we're chatting over coffee. Zero jargon, promise!",
        url: notebook!("module1_foundations/01_what_is_finetuning.ipynb"),
        status: LessonStatus::Available,
        icon: "💡",
        ..Lesson::DRAFT
    },
    Lesson {
        id: "m1l2",
        title: "Your First AI Model (Yes, YOU Can Do This!)",
        duration: "1 hour",
        difficulty: "Beginner",
        description: "Let's actually load a real AI model and make it work! We'll take it step-by-step. You'll be amazed at how easy this is.",
        url: notebook!("module1_foundations/02_your_first_model.ipynb"),
        status: LessonStatus::Available,
        icon: "🤖",
        ..Lesson::DRAFT
    },
    Lesson {
        id: "m1l3",
        title: "Understanding Your Data (The Secret Sauce)",
        duration: "1 hour",
        difficulty: "Beginner",
        description: "Data is like ingredients for cooking. Bad ingredients = bad food. I'll show you how to prep your data like a chef!",
        url: notebook!("module1_foundations/03_understanding_data.ipynb"),
        status: LessonStatus::Available,
        icon: "📊",
        ..Lesson::DRAFT
    },
];

const FIRST_TRAINING: &[Lesson] = &[
    Lesson {
        id: "m2l1",
        title: "ACTUALLY Fine-Tune Your First Model! 🎉",
        duration: "2 hours",
        difficulty: "Beginner",
        description: "This is THE lesson! You'll train your own AI model from scratch. Watch it learn in real-time. It's like magic, but it's REAL!",
        url: notebook!("module2_first_training/01_first_finetuning.ipynb"),
        status: LessonStatus::Available,
        featured: true,
        icon: "⚡",
    },
    Lesson {
        id: "m2l2",
        title: "Making Your Model Better (Hyperparameter Tuning)",
        duration: "1.5 hours",
        difficulty: "Intermediate",
        description: "Learn the secret dials and knobs that make your model go from good to GREAT! We'll experiment with learning rates, batch sizes, and more.",
        url: notebook!("module2_first_training/02_hyperparameter_tuning.ipynb"),
        status: LessonStatus::Available,
        icon: "🎛️",
        ..Lesson::DRAFT
    },
    Lesson {
        id: "m2l3",
        title: "Debugging Like a Pro (When Things Go Wrong)",
        duration: "1 hour",
        difficulty: "Intermediate",
        description: "Your model will fail. A lot. Learn how to fix the most common errors fast and become a debugging ninja!",
        url: notebook!("module2_first_training/03_debugging_training.ipynb"),
        status: LessonStatus::Available,
        icon: "🔧",
        ..Lesson::DRAFT
    },
];

const ADVANCED: &[Lesson] = &[
    Lesson {
        id: "m3l1",
        title: "LoRA & QLoRA (Train HUGE Models on Free GPUs!)",
        duration: "1.5 hours",
        difficulty: "Advanced",
        description: "Train models with BILLIONS of parameters using these clever tricks. Same results, way less memory!",
        icon: "🚀",
        ..Lesson::DRAFT
    },
    Lesson {
        id: "m3l2",
        title: "Multi-Task Learning (One Model, Many Jobs)",
        duration: "1.5 hours",
        difficulty: "Advanced",
        description: "Train your model to do multiple tasks at once. Sentiment analysis AND summarization? Easy!",
        icon: "🎨",
        ..Lesson::DRAFT
    },
    Lesson {
        id: "m3l3",
        title: "Custom Loss Functions (Get Creative!)",
        duration: "1 hour",
        difficulty: "Advanced",
        description: "Sometimes the default loss function isn't enough. Let's write our own!",
        icon: "🎲",
        ..Lesson::DRAFT
    },
];

const PROJECTS: &[Lesson] = &[
    Lesson {
        id: "m4l1",
        title: "Project: Build a Smart Customer Support Bot",
        duration: "3 hours",
        difficulty: "Intermediate",
        description: "End-to-end project: Fine-tune a model to answer customer questions based on your company docs.",
        icon: "💬",
        ..Lesson::DRAFT
    },
    Lesson {
        id: "m4l2",
        title: "Project: Create a Code Review Assistant",
        duration: "3 hours",
        difficulty: "Advanced",
        description: "Train a model to review code, catch bugs, and suggest improvements. Like having a senior dev on your team!",
        icon: "💻",
        ..Lesson::DRAFT
    },
];

const DEPLOYMENT: &[Lesson] = &[
    Lesson {
        id: "m5l1",
        title: "Deploy Your Model (Make it Public!)",
        duration: "2 hours",
        difficulty: "Intermediate",
        description: "From Colab to the cloud! Deploy your model using HuggingFace Spaces, Gradio, or FastAPI.",
        icon: "🚀",
        ..Lesson::DRAFT
    },
    Lesson {
        id: "m5l2",
        title: "Monitoring & Improving (Keep it Running!)",
        duration: "1.5 hours",
        difficulty: "Advanced",
        description: "Track performance, handle errors, and continuously improve your deployed model.",
        icon: "📊",
        ..Lesson::DRAFT
    },
];
