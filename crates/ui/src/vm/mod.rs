mod gallery_vm;
mod markdown_vm;
mod media_vm;
mod quiz_vm;

pub use gallery_vm::{
    GalleryImageVm, NO_IMAGES_MESSAGE, ROOT_FOLDER_LABEL, folder_label, map_gallery,
};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use media_vm::{
    ImageVm, PLAYER_ID, PlayerKind, SoundVm, map_image, map_sound, volume_script,
    youtube_embed_src,
};
pub use quiz_vm::{
    ChoiceIntent, ChoiceQuestionVm, CompletionVm, EMPTY_BANK_MESSAGE, FeedbackVm,
    OrderingIntent, OrderingItemVm, OrderingQuestionVm, QuestionChrome, QuizScreen,
    UPLOAD_PROMPT, arrangement_keys, choice_feedback, current_arrangement, map_choice_screen,
    map_ordering_screen, ordering_feedback,
};
